pub mod callable;
