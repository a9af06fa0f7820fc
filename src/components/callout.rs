use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Warning,
    Error,
}

impl CalloutKind {
    fn class(&self) -> &'static str {
        match self {
            CalloutKind::Info => "callout callout-info",
            CalloutKind::Warning => "callout callout-warning",
            CalloutKind::Error => "callout callout-error",
        }
    }
}

/// A boxed message: insights, advisories and errors.
#[component]
pub fn Callout(kind: CalloutKind, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class={kind.class()} role="note">
            <p>{ text }</p>
        </div>
    }
}
