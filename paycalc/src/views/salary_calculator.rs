//! Salary calculator page.

use paycalc_router::{LoadError, View};
use std::rc::Rc;

use crate::routes::SALARY_CALCULATOR_NAME;

/// The salary calculator page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    pub const NAME: &'static str = SALARY_CALCULATOR_NAME;

    /// Loader used by the route table; resolves on first visit of the route.
    pub async fn load() -> Result<Rc<dyn View>, LoadError> {
        Ok(Rc::new(SalaryCalculator))
    }
}

impl View for SalaryCalculator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn render(&self) -> String {
        r#"<main class="salary-calculator">
  <h1>薪资计算</h1>
  <form id="salary-form">
    <label for="gross-salary">税前月薪</label>
    <input id="gross-salary" name="gross" type="number" min="0" step="0.01" inputmode="decimal">
    <button type="submit">计算</button>
  </form>
  <section id="salary-result" aria-live="polite"></section>
</main>"#
            .to_owned()
    }
}
