// Contenedor de "últimos empréstimos" en la página inicial

use web_sys::Element;

use crate::dom::set_inner_html;
use crate::viewmodels::LoanListTarget;

pub struct DomLoanList {
    container: Element,
}

impl DomLoanList {
    pub fn new(container: Element) -> Self {
        Self { container }
    }
}

impl LoanListTarget for DomLoanList {
    /// El servidor entrega HTML ya renderizado y confiable
    fn replace_markup(&self, html: &str) {
        set_inner_html(&self.container, html);
    }
}
