// ============================================================================
// SPAWN - Lanzar futures sin bloquear el hilo de UI
// ============================================================================

use futures::future::LocalBoxFuture;

/// Ejecuta trabajo asíncrono "fire-and-forget" en el event loop
pub trait TaskSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Spawner del navegador (`wasm_bindgen_futures::spawn_local`)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

#[cfg(target_arch = "wasm32")]
impl TaskSpawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
