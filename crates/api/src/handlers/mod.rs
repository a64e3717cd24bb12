pub mod tutorials;
