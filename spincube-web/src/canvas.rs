/// Canvas lookup and WebGL context acquisition
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext, Window};

use crate::error::RenderError;

/// Canvas element sized to its CSS box, with a live GL context
pub struct Surface {
    pub canvas: HtmlCanvasElement,
    pub gl: WebGlRenderingContext,
    pub width: u32,
    pub height: u32,
}

impl Surface {
    /// Find the canvas, fix its drawing-buffer size and open a context.
    ///
    /// If no context name works the user gets an alert; the error is still
    /// returned so startup stops.
    pub fn acquire(
        window: &Window,
        canvas_id: &str,
        context_names: &[String],
    ) -> Result<Self, RenderError> {
        let document = window.document().ok_or(RenderError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| RenderError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into()
            .map_err(|_| RenderError::NotACanvas(canvas_id.to_string()))?;

        let width = canvas.client_width().max(0) as u32;
        let height = canvas.client_height().max(0) as u32;
        canvas.set_attribute("width", &width.to_string())?;
        canvas.set_attribute("height", &height.to_string())?;
        canvas.set_tab_index(0);

        let gl = match first_available(context_names, |name| {
            Ok(canvas
                .get_context(name)?
                .and_then(|ctx| ctx.dyn_into::<WebGlRenderingContext>().ok()))
        }) {
            Ok((gl, name)) => {
                log::info!("using `{}` context on {}x{} canvas", name, width, height);
                gl
            }
            Err(err) => {
                return Err(report_failure(err, || {
                    Ok(window.alert_with_message("browser might not support webgl")?)
                }))
            }
        };

        Ok(Self {
            canvas,
            gl,
            width,
            height,
        })
    }
}

/// Tell the user when no context exists, keeping the original error.
///
/// A failing alert is only logged; it must not mask why startup stopped.
pub(crate) fn report_failure<A>(err: RenderError, alert: A) -> RenderError
where
    A: FnOnce() -> Result<(), RenderError>,
{
    if let RenderError::ContextUnavailable { .. } = err {
        if let Err(alert_err) = alert() {
            log::error!("could not show alert: {}", alert_err);
        }
    }
    err
}

/// Try each name in order and return the first context that exists.
///
/// Errors from the lookup itself abort immediately; names that simply yield
/// nothing fall through to the next one.
pub(crate) fn first_available<'n, T, F>(
    names: &'n [String],
    mut lookup: F,
) -> Result<(T, &'n str), RenderError>
where
    F: FnMut(&str) -> Result<Option<T>, RenderError>,
{
    for name in names {
        match lookup(name)? {
            Some(ctx) => return Ok((ctx, name.as_str())),
            None => log::debug!("context `{}` unavailable", name),
        }
    }

    Err(RenderError::ContextUnavailable {
        tried: names.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["webgl".to_string(), "experimental-webgl".to_string()]
    }

    #[test]
    fn test_primary_name_wins() {
        let mut tried = Vec::new();
        let names = names();
        let (ctx, name) = first_available(&names, |name| {
            tried.push(name.to_string());
            Ok(Some(1))
        })
        .unwrap();
        assert_eq!((ctx, name), (1, "webgl"));
        assert_eq!(tried, vec!["webgl"]);
    }

    #[test]
    fn test_falls_back_once() {
        let names = names();
        let (ctx, name) = first_available(&names, |name| {
            Ok((name == "experimental-webgl").then_some(2))
        })
        .unwrap();
        assert_eq!((ctx, name), (2, "experimental-webgl"));
    }

    #[test]
    fn test_none_available() {
        let err = first_available::<u8, _>(&names(), |_| Ok(None)).unwrap_err();
        match err {
            RenderError::ContextUnavailable { tried } => {
                assert_eq!(tried, "webgl, experimental-webgl")
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_lookup_error_stops_search() {
        let mut calls = 0;
        let err = first_available::<u8, _>(&names(), |_| {
            calls += 1;
            Err(RenderError::Js("context creation threw".to_string()))
        })
        .unwrap_err();
        assert!(matches!(err, RenderError::Js(_)));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_failed_alert_keeps_context_error() {
        let err = report_failure(
            RenderError::ContextUnavailable {
                tried: "webgl".to_string(),
            },
            || Err(RenderError::Js("alert blocked".to_string())),
        );
        assert!(matches!(err, RenderError::ContextUnavailable { .. }));
    }

    #[test]
    fn test_alert_only_for_missing_context() {
        let mut alerted = false;
        let err = report_failure(RenderError::NoDocument, || {
            alerted = true;
            Ok(())
        });
        assert!(matches!(err, RenderError::NoDocument));
        assert!(!alerted);

        let err = report_failure(
            RenderError::ContextUnavailable {
                tried: "webgl".to_string(),
            },
            || {
                alerted = true;
                Ok(())
            },
        );
        assert!(matches!(err, RenderError::ContextUnavailable { .. }));
        assert!(alerted);
    }
}
