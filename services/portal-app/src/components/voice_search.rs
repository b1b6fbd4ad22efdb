//! FAQ search box with optional speech input

use client_gate::{CapabilityGate, FnProbe, ProbeState, RenderContext};
use leptos::prelude::*;

/// Global constructors that provide the Web Speech recognition API
#[cfg_attr(
    not(all(feature = "hydrate", target_arch = "wasm32")),
    allow(dead_code)
)]
const SPEECH_CONSTRUCTORS: &[&str] = &["SpeechRecognition", "webkitSpeechRecognition"];

/// Search form submitting `q` to `action`.
///
/// The microphone button only appears once a browser has confirmed speech
/// recognition support; everything else works as a plain form.
#[component]
pub fn VoiceSearch(#[prop(into, default = "/faq".to_string())] action: String) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let listening = RwSignal::new(false);
    let speech = RwSignal::new(ProbeState::Unprobed);
    let gate = StoredValue::new(CapabilityGate::new(FnProbe::new(
        "SpeechRecognition",
        speech_supported,
    )));

    Effect::new(move |_| {
        if let Some(state) = gate.try_update_value(|gate| gate.resolve(RenderContext::current())) {
            speech.set(state);
        }
    });

    let on_mic = move |_| {
        if listening.get_untracked() {
            return;
        }
        listening.set(true);
        let started = start_recognition(
            move |text| query.set(text),
            move || listening.set(false),
        );
        if !started {
            listening.set(false);
        }
    };

    view! {
        <form class="voice-search" action=action method="get" role="search">
            <input
                type="search"
                name="q"
                placeholder="Ask about aligners..."
                aria-label="Search questions"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || speech.get() == ProbeState::Available>
                <button
                    type="button"
                    class="voice-search-mic"
                    aria-label="Search by voice"
                    aria-pressed=move || listening.get().to_string()
                    on:click=on_mic
                >
                    {move || if listening.get() { "Listening..." } else { "Speak" }}
                </button>
            </Show>
            <button type="submit">"Search"</button>
        </form>
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn speech_supported() -> bool {
    use wasm_bindgen::JsValue;

    web_sys::window().is_some_and(|window| {
        SPEECH_CONSTRUCTORS.iter().any(|name| {
            js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false)
        })
    })
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
fn speech_supported() -> bool {
    false
}

/// Start one recognition session. Returns false if it could not be started.
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn start_recognition(on_text: impl Fn(String) + 'static, on_end: impl Fn() + 'static) -> bool {
    match recognize(on_text, on_end) {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::warn_1(&e);
            false
        }
    }
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
fn start_recognition(_on_text: impl Fn(String) + 'static, _on_end: impl Fn() + 'static) -> bool {
    false
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn recognize(
    on_text: impl Fn(String) + 'static,
    on_end: impl Fn() + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let constructor = SPEECH_CONSTRUCTORS
        .iter()
        .filter_map(|name| Reflect::get(&window, &JsValue::from_str(name)).ok())
        .find(|value| value.is_function())
        .ok_or_else(|| JsValue::from_str("speech recognition unavailable"))?
        .unchecked_into::<Function>();

    let recognition = Reflect::construct(&constructor, &Array::new())?;
    Reflect::set(&recognition, &"lang".into(), &"en-US".into())?;
    Reflect::set(&recognition, &"interimResults".into(), &JsValue::FALSE)?;

    let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        if let Some(text) = first_transcript(&event) {
            on_text(text);
        }
    });
    Reflect::set(&recognition, &"onresult".into(), on_result.as_ref())?;
    // One session per click; the handlers live as long as the recognizer.
    on_result.forget();

    let on_end = Closure::<dyn FnMut()>::new(on_end);
    Reflect::set(&recognition, &"onend".into(), on_end.as_ref())?;
    on_end.forget();

    Reflect::get(&recognition, &"start".into())?
        .unchecked_into::<Function>()
        .call0(&recognition)?;
    Ok(())
}

/// `event.results[0][0].transcript`
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn first_transcript(event: &wasm_bindgen::JsValue) -> Option<String> {
    use js_sys::Reflect;

    let results = Reflect::get(event, &"results".into()).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &"transcript".into())
        .ok()?
        .as_string()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn server_render_has_form_without_microphone() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <VoiceSearch action="/faq" /> }.to_html());
        assert!(html.contains(r#"name="q""#), "{html}");
        assert!(html.contains(r#"action="/faq""#), "{html}");
        assert!(!html.contains("voice-search-mic"), "{html}");
    }
}
