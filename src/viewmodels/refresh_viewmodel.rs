// ============================================================================
// REFRESH VIEWMODEL - Refresco periódico de "últimos empréstimos"
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::errors::ClientError;

/// Origen del fragmento HTML de la lista (el servidor lo entrega renderizado)
pub trait LoanListSource {
    fn fetch_latest(&self) -> LocalBoxFuture<'static, Result<String, ClientError>>;
}

/// Contenedor de la lista en la página
pub trait LoanListTarget {
    fn replace_markup(&self, html: &str);
}

/// Marca la petición en curso y la libera al salir, aunque el future se descarte
struct InFlightGuard(Rc<Cell<bool>>);

impl InFlightGuard {
    fn acquire(flag: &Rc<Cell<bool>>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag.clone()))
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Clone)]
pub struct RefreshViewModel {
    source: Rc<dyn LoanListSource>,
    target: Rc<dyn LoanListTarget>,
    in_flight: Rc<Cell<bool>>,
}

impl RefreshViewModel {
    pub fn new(source: Rc<dyn LoanListSource>, target: Rc<dyn LoanListTarget>) -> Self {
        Self {
            source,
            target,
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    /// Sólo la página inicial refresca la lista
    pub fn should_poll(pathname: &str, home_path: &str) -> bool {
        pathname == home_path
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Una petición; en error el contenido actual no se toca
    pub async fn refresh_once(&self) -> Result<(), ClientError> {
        let html = self.source.fetch_latest().await?;
        self.target.replace_markup(&html);
        Ok(())
    }

    /// Un ciclo del intervalo: registra el error y sigue, sin reintentos
    pub async fn tick(&self) {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            log::debug!("🔄 [REFRESH] Petición anterior en curso, saltando ciclo");
            return;
        };

        log::info!("🔄 [REFRESH] Actualizando lista...");
        match self.refresh_once().await {
            Ok(()) => log::info!("✅ [REFRESH] Lista actualizada"),
            Err(e) => log::error!("❌ [REFRESH] Error al actualizar la lista: {}", e),
        }
    }
}
