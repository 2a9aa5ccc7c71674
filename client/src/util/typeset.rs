//! Math typesetting service.
//!
//! Entries are rendered as text nodes containing inline-math markup; the
//! [`Typesetter`] then asks the typesetting engine to scan the document and
//! replace that markup with typeset output. The engine is MathJax 2.7.9, loaded
//! by injecting a script element on mount and removed again on unmount.
//!
//! Text from the recognition service is untrusted. [`sanitize_tex`] strips
//! math delimiters, control characters and the TeX commands that reach outside
//! the formula (links, CSS, macro definitions), and balances braces so a result
//! cannot leave its `\LARGE{...}` group or its math span. MathJax's Safe
//! extension is loaded as a second line of defense.

#[cfg(test)]
#[path = "typeset_test.rs"]
mod typeset_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// MathJax bundle with the TeX, MathML and AsciiMath inputs and HTML-CSS output.
pub const MATHJAX_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.9/MathJax.js?config=TeX-MML-AM_CHTML";

/// Inline-math delimiter pairs registered with the engine.
pub const INLINE_MATH_DELIMITERS: [(&str, &str); 2] = [("$", "$"), ("\\(", "\\)")];

/// Engine extensions loaded at configuration time.
pub const MATHJAX_EXTENSIONS: [&str; 1] = ["Safe.js"];

/// TeX commands removed from remote text. Their arguments stay behind as
/// plain groups.
pub const BLOCKED_TEX_COMMANDS: [&str; 11] = [
    "href",
    "class",
    "style",
    "cssId",
    "unicode",
    "require",
    "mmlToken",
    "def",
    "let",
    "newcommand",
    "renewcommand",
];

/// Requests typesetting of newly inserted markup.
pub trait Typesetter {
    /// Typeset any markup added since the last call. Must be safe to call
    /// before the engine has finished loading.
    fn typeset(&self);
}

/// Typesetter that does nothing. Used during SSR and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTypesetter;

impl Typesetter for NoopTypesetter {
    fn typeset(&self) {}
}

/// Make remote text safe to place inside `\LARGE{...}`.
///
/// Drops math delimiters (`\(`, `\)`, `\[`, `\]`, `$`), control characters,
/// a dangling backslash and every command in [`BLOCKED_TEX_COMMANDS`]. Braces
/// are balanced: a `}` with no open group is dropped and missing closers are
/// appended. Escaped braces (`\{`, `\}`) are literal and do not count.
#[must_use]
pub fn sanitize_tex(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    let mut chars = raw.trim().chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek().copied() {
                Some('(' | ')' | '[' | ']') => {
                    chars.next();
                }
                Some(next) if next.is_ascii_alphabetic() => {
                    let mut name = String::new();
                    while let Some(&letter) = chars.peek().filter(|l| l.is_ascii_alphabetic()) {
                        name.push(letter);
                        chars.next();
                    }
                    if !BLOCKED_TEX_COMMANDS.contains(&name.as_str()) {
                        out.push('\\');
                        out.push_str(&name);
                    }
                }
                Some(next) if next != '$' && !next.is_control() => {
                    chars.next();
                    out.push('\\');
                    out.push(next);
                }
                _ => {}
            },
            '{' => {
                depth += 1;
                out.push(c);
            }
            '}' if depth == 0 => {}
            '}' => {
                depth -= 1;
                out.push(c);
            }
            '$' => {}
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out.extend(std::iter::repeat_n('}', depth));
    out
}

/// Inline markup for one entry: `\(\LARGE{expression = answer}\)`.
#[must_use]
pub fn entry_markup(expression: &str, answer: &str) -> String {
    format!("\\(\\LARGE{{{} = {}}}\\)", sanitize_tex(expression), sanitize_tex(answer))
}

/// MathJax-backed typesetter owning the injected script element.
#[cfg(feature = "hydrate")]
pub struct MathJaxTypesetter {
    script: RefCell<Option<web_sys::HtmlScriptElement>>,
    on_load: RefCell<Option<Closure<dyn FnMut()>>>,
}

#[cfg(feature = "hydrate")]
impl MathJaxTypesetter {
    /// Inject the MathJax script into `<head>`. Failure is logged; typesetting
    /// then silently does nothing.
    pub fn mount() -> Self {
        let this = Self { script: RefCell::new(None), on_load: RefCell::new(None) };
        if let Err(err) = this.inject() {
            leptos::logging::warn!("mathjax: script injection failed: {err:?}");
        }
        this
    }

    fn inject(&self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let head = document.head().ok_or_else(|| JsValue::from_str("no head element"))?;
        let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_type("text/javascript");
        script.set_src(MATHJAX_SRC);
        script.set_async(true);

        let on_load = Closure::<dyn FnMut()>::new(|| {
            if let Err(err) = configure_inline_math() {
                leptos::logging::warn!("mathjax: configuration failed: {err:?}");
            }
        });
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        head.append_child(&script)?;

        *self.script.borrow_mut() = Some(script);
        *self.on_load.borrow_mut() = Some(on_load);
        Ok(())
    }

    /// Remove the script element. Idempotent.
    pub fn unmount(&self) {
        if let Some(script) = self.script.borrow_mut().take() {
            script.set_onload(None);
            script.remove();
        }
        self.on_load.borrow_mut().take();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for MathJaxTypesetter {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(feature = "hydrate")]
impl Typesetter for MathJaxTypesetter {
    fn typeset(&self) {
        if let Err(err) = queue_typeset() {
            leptos::logging::warn!("mathjax: typeset failed: {err:?}");
        }
    }
}

/// `window.MathJax.Hub`, once the script has loaded.
#[cfg(feature = "hydrate")]
fn mathjax_hub() -> Result<Option<JsValue>, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let mathjax = js_sys::Reflect::get(&window, &JsValue::from_str("MathJax"))?;
    if mathjax.is_undefined() || mathjax.is_null() {
        return Ok(None);
    }
    let hub = js_sys::Reflect::get(&mathjax, &JsValue::from_str("Hub"))?;
    if hub.is_undefined() || hub.is_null() {
        return Ok(None);
    }
    Ok(Some(hub))
}

#[cfg(feature = "hydrate")]
fn hub_method(hub: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(hub, &JsValue::from_str(name))?.dyn_into()
}

/// `MathJax.Hub.Config({ extensions: [...], tex2jax: { inlineMath: [...] } })`.
#[cfg(feature = "hydrate")]
fn configure_inline_math() -> Result<(), JsValue> {
    let Some(hub) = mathjax_hub()? else {
        return Ok(());
    };
    let inline_math = js_sys::Array::new();
    for (open, close) in INLINE_MATH_DELIMITERS {
        inline_math.push(&js_sys::Array::of2(&JsValue::from_str(open), &JsValue::from_str(close)));
    }
    let tex2jax = js_sys::Object::new();
    js_sys::Reflect::set(&tex2jax, &JsValue::from_str("inlineMath"), &inline_math)?;
    let extensions: js_sys::Array = MATHJAX_EXTENSIONS.iter().map(|e| JsValue::from_str(e)).collect();
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &JsValue::from_str("extensions"), &extensions)?;
    js_sys::Reflect::set(&config, &JsValue::from_str("tex2jax"), &tex2jax)?;
    hub_method(&hub, "Config")?.call1(&hub, &config)?;
    Ok(())
}

/// `MathJax.Hub.Queue(["Typeset", MathJax.Hub])`.
#[cfg(feature = "hydrate")]
fn queue_typeset() -> Result<(), JsValue> {
    let Some(hub) = mathjax_hub()? else {
        return Ok(());
    };
    let job = js_sys::Array::of2(&JsValue::from_str("Typeset"), &hub);
    hub_method(&hub, "Queue")?.call1(&hub, &job)?;
    Ok(())
}
