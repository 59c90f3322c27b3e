//! Route table of the application.

#![allow(missing_docs)]

use paycalc_router::{LazyView, RouteDescriptor};

use crate::views::SalaryCalculator;

pub const SALARY_CALCULATOR_PATH: &str = "/salary-calculator";
pub const SALARY_CALCULATOR_NAME: &str = "SalaryCalculator";
pub const SALARY_CALCULATOR_TITLE: &str = "薪资计算";

/// The application's route table.
///
/// `/` redirects to the calculator, which is loaded on first visit.
pub fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::redirect("/", SALARY_CALCULATOR_PATH),
        RouteDescriptor::view(SALARY_CALCULATOR_PATH, LazyView::new(SalaryCalculator::load))
            .with_name(SALARY_CALCULATOR_NAME)
            .with_meta("title", SALARY_CALCULATOR_TITLE),
    ]
}
