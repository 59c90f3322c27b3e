//! Views reachable through the route table.

pub mod salary_calculator;

pub use salary_calculator::SalaryCalculator;
