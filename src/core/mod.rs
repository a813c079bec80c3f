pub mod adder;
pub mod greeter;
pub mod report;
