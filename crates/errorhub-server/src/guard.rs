use std::any::Any;
use std::future::Future;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::boundary::BoundaryError;

/// Signature of the panic handler installed by [`boundary_layer`]
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Run a handler body and translate its failure at the boundary
///
/// This wraps the future a handler produces rather than the handler
/// function itself. Handlers that return `Result<_, BoundaryError>` get the
/// same translation from axum directly through `IntoResponse`, so `guard`
/// is only needed where a handler must return a plain `Response`.
///
/// Successful results pass through unchanged. Arguments are captured by
/// the caller, so any handler shape can be wrapped:
///
/// ```ignore
/// async fn show(Path(id): Path<u64>) -> Response {
///     guard(async move { load(id).await }).await
/// }
/// ```
pub async fn guard<Fut, T, E>(handler: Fut) -> Response
where
    Fut: Future<Output = Result<T, E>>,
    T: IntoResponse,
    E: Into<BoundaryError>,
{
    match handler.await {
        Ok(value) => value.into_response(),
        Err(error) => error.into().into_response(),
    }
}

/// Layer that converts handler panics into the unclassified 500 body
pub fn boundary_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| "handler panicked".to_owned());

    BoundaryError::Unclassified {
        error_type: "panic".to_owned(),
        message,
    }
    .into_response()
}
