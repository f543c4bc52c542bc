use yew::prelude::*;

use super::forward;

/// Shown in place of a reported version when the backend never named one.
pub const UNKNOWN_VERSION: &str = "unknown";

#[derive(Properties, PartialEq)]
pub struct VersionGateProps {
    /// Version the console requires, shown verbatim.
    pub expected_version: String,
    /// Version the backend reported, absent when it was unreachable.
    #[prop_or_default]
    pub backend_version: Option<String>,
    /// Bypass action. The "continue anyway" control is rendered iff this is
    /// supplied; proceeding past the gate is entirely the caller's business.
    #[prop_or_default]
    pub on_ignore: Option<Callback<()>>,
    /// Reload capability. Defaults to a full browser reload; tests swap in a
    /// double.
    #[prop_or_else(browser_reload)]
    pub on_reload: Callback<()>,
}

fn browser_reload() -> Callback<()> {
    Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    })
}

/// Whether the caller handed us a way past the gate.
enum Bypass {
    Available(Callback<()>),
    Unavailable,
}

impl Bypass {
    fn from_prop(on_ignore: &Option<Callback<()>>) -> Self {
        match on_ignore {
            Some(cb) => Bypass::Available(cb.clone()),
            None => Bypass::Unavailable,
        }
    }
}

/// Blocking notice for a backend running a different release than the one
/// this console was built for. The caller decides when the gate is shown;
/// the component itself compares nothing.
#[function_component(VersionGate)]
pub fn version_gate(props: &VersionGateProps) -> Html {
    let reported = props
        .backend_version
        .clone()
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

    let on_reload: Callback<MouseEvent> = forward(&props.on_reload);

    let bypass = match Bypass::from_prop(&props.on_ignore) {
        Bypass::Available(on_ignore) => {
            let onclick: Callback<MouseEvent> = forward(&on_ignore);
            html! {
                <button onclick={onclick} class="gate-ignore">
                    { "Continue anyway" }
                </button>
            }
        }
        Bypass::Unavailable => html! {},
    };

    html! {
        <div class="gate-overlay">
            <div class="gate-card">
                <h1 class="gate-title">{ "Backend version mismatch" }</h1>
                <p class="gate-text">
                    { "This console was built for backend version " }
                    <span class="gate-version">{ props.expected_version.clone() }</span>
                    { " but the running backend reports " }
                    <span class="gate-version">{ reported }</span>
                    { "." }
                </p>
                <p class="gate-hint">
                    { "Reload once the backend has finished updating." }
                </p>
                <div class="gate-actions">
                    <button onclick={on_reload} class="gate-reload">
                        { "Reload" }
                    </button>
                    { bypass }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    async fn render(props: VersionGateProps) -> String {
        LocalServerRenderer::<VersionGate>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn shows_both_versions_and_only_the_reload_control() {
        let html = render(yew::props!(VersionGateProps {
            expected_version: "1.3.0".to_string(),
            backend_version: Some("1.2.0".to_string()),
        }))
        .await;

        assert!(html.contains("1.3.0"));
        assert!(html.contains("1.2.0"));
        assert!(html.contains("Reload"));
        assert!(!html.contains("Continue anyway"));
        assert!(!html.contains(UNKNOWN_VERSION));
    }

    #[tokio::test]
    async fn unreachable_backend_shows_placeholder_and_bypass() {
        let html = render(yew::props!(VersionGateProps {
            expected_version: "2.0.0".to_string(),
            on_ignore: Some(Callback::noop()),
        }))
        .await;

        assert!(html.contains("2.0.0"));
        assert!(html.contains(UNKNOWN_VERSION));
        assert!(html.contains("Reload"));
        assert!(html.contains("Continue anyway"));
    }

    #[tokio::test]
    async fn empty_reported_version_is_shown_as_is_not_as_unknown() {
        let html = render(yew::props!(VersionGateProps {
            expected_version: "1.3.0".to_string(),
            backend_version: Some(String::new()),
        }))
        .await;

        assert!(!html.contains(UNKNOWN_VERSION));
    }

    #[test]
    fn bypass_tracks_whether_an_ignore_action_was_supplied() {
        assert!(matches!(Bypass::from_prop(&None), Bypass::Unavailable));
        assert!(matches!(
            Bypass::from_prop(&Some(Callback::noop())),
            Bypass::Available(_)
        ));
    }

    fn counter() -> (Rc<Cell<usize>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let cb = {
            let count = count.clone();
            Callback::from(move |()| count.set(count.get() + 1))
        };
        (count, cb)
    }

    #[test]
    fn reload_control_fires_reload_once_and_never_ignore() {
        let (reloaded, on_reload) = counter();
        let (ignored, on_ignore) = counter();

        let reload_click: Callback<()> = forward(&on_reload);
        let ignore_click: Callback<()> = forward(&on_ignore);

        reload_click.emit(());

        assert_eq!(reloaded.get(), 1);
        assert_eq!(ignored.get(), 0);
        drop(ignore_click);
    }

    #[test]
    fn ignore_control_fires_ignore_once_and_never_reload() {
        let (reloaded, on_reload) = counter();
        let (ignored, on_ignore) = counter();

        let reload_click: Callback<()> = forward(&on_reload);
        let ignore_click: Callback<()> = match Bypass::from_prop(&Some(on_ignore)) {
            Bypass::Available(cb) => forward(&cb),
            Bypass::Unavailable => panic!("bypass should be available"),
        };

        ignore_click.emit(());

        assert_eq!(ignored.get(), 1);
        assert_eq!(reloaded.get(), 0);
        drop(reload_click);
    }
}
