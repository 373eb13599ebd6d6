use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::names::{NameEntry, NameSequence};
use crate::runtime::{CLOSE_TRANSITION, PlaybackState, WallConfig, WallVariant};

const STYLESHEET: &str = include_str!("../../static/wall.css");
const STYLE_ELEMENT_ID: &str = "wall-of-signers-styles";

/// The rendered widget. All fields are cheap JS handles.
#[derive(Clone, Debug)]
pub struct Shell {
    pub container: HtmlElement,
    pub scroll: HtmlElement,
    pub toggle: HtmlElement,
    pub close: Option<HtmlElement>,
    pub launcher: Option<HtmlElement>,
}

impl Shell {
    pub fn remove(&self) {
        self.container.remove();
        if let Some(launcher) = self.launcher.as_ref() {
            launcher.remove();
        }
    }
}

/// Adds the stylesheet to `<head>` once per document.
pub fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));

    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?
            .append_child(&style)?,
    };

    Ok(())
}

pub fn build_shell(
    document: &Document,
    root: &Element,
    config: &WallConfig,
) -> Result<Shell, JsValue> {
    let container = element(document, "div", "wos")?;
    container.style().set_property(
        "--wos-transition",
        &format!("{}ms", CLOSE_TRANSITION.as_millis()),
    )?;

    let header = element(document, "div", "wos__header")?;
    let title = element(document, "h2", "wos__title")?;
    title.set_text_content(Some(&config.title));
    header.append_child(&title)?;

    let controls = element(document, "div", "wos__controls")?;
    let toggle = button(document, "wos__toggle")?;
    controls.append_child(&toggle)?;
    header.append_child(&controls)?;
    container.append_child(&header)?;

    let viewport = element(document, "div", "wos__viewport")?;
    let scroll = element(document, "div", "wos__scroll")?;
    scroll.set_attribute("aria-label", &config.title)?;
    viewport.append_child(&scroll)?;
    container.append_child(&viewport)?;

    if let Some(cta) = config.call_to_action.as_ref() {
        let link = element(document, "a", "wos__cta")?;
        link.set_attribute("href", &cta.href)?;
        link.set_text_content(Some(&cta.label));
        container.append_child(&link)?;
    }

    let (close, launcher) = match config.variant {
        WallVariant::Panel => {
            container.class_list().add_1("wos--panel")?;
            container.set_attribute("role", "region")?;
            container.set_attribute("aria-label", &config.title)?;
            root.append_child(&container)?;
            (None, None)
        }
        WallVariant::Overlay => {
            container.class_list().add_1("wos--overlay")?;
            container.set_attribute("role", "dialog")?;
            container.set_attribute("aria-modal", "true")?;
            container.set_attribute("aria-label", &config.title)?;
            container.set_attribute("aria-hidden", "true")?;

            let close = button(document, "wos__close")?;
            close.set_attribute("aria-label", "Close")?;
            close.set_text_content(Some("\u{00d7}"));
            controls.append_child(&close)?;

            let launcher = button(document, "wos__launcher")?;
            launcher.set_attribute("aria-haspopup", "dialog")?;
            launcher.set_text_content(Some(&config.title));
            root.append_child(&launcher)?;

            // Fixed positioning must not be affected by transforms on the
            // mount point's ancestors.
            let body = document
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?;
            body.append_child(&container)?;

            (Some(close), Some(launcher))
        }
    };

    Ok(Shell {
        container,
        scroll,
        toggle,
        close,
        launcher,
    })
}

/// Renders each half as its own masonry block. The blocks are identical, so
/// the top of the second one sits exactly at half the scroll height.
pub fn render_names(
    document: &Document,
    scroll: &HtmlElement,
    names: &NameSequence,
) -> Result<(), JsValue> {
    scroll.set_text_content(None);

    if names.is_empty() {
        return Ok(());
    }

    scroll.append_child(&name_block(document, names.first_half())?)?;

    let echo = name_block(document, names.second_half())?;
    echo.set_attribute("aria-hidden", "true")?;
    scroll.append_child(&echo)?;

    Ok(())
}

pub fn render_playback(
    shell: &Shell,
    state: PlaybackState,
) -> Result<(), JsValue> {
    let (text, label, playback) = match state {
        PlaybackState::Playing => ("Pause", "Pause scrolling", "playing"),
        PlaybackState::Paused => ("Play", "Resume scrolling", "paused"),
    };

    shell.toggle.set_text_content(Some(text));
    shell.toggle.set_attribute("aria-label", label)?;
    shell.scroll.set_title(label);
    shell.container.set_attribute("data-playback", playback)?;
    Ok(())
}

pub fn set_overlay_open(shell: &Shell, open: bool) -> Result<(), JsValue> {
    shell
        .container
        .class_list()
        .toggle_with_force("wos--open", open)?;
    shell
        .container
        .set_attribute("aria-hidden", if open { "false" } else { "true" })?;

    let focus_target = if open {
        shell.close.as_ref()
    } else {
        shell.launcher.as_ref()
    };
    if let Some(target) = focus_target {
        target.focus()?;
    }

    Ok(())
}

fn name_block(
    document: &Document,
    names: &[NameEntry],
) -> Result<HtmlElement, JsValue> {
    let list = element(document, "ul", "wos__names")?;
    for name in names {
        let item = document.create_element("li")?;
        item.set_text_content(Some(name.as_str()));
        list.append_child(&item)?;
    }
    Ok(list)
}

fn button(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let button = element(document, "button", class)?;
    button.set_attribute("type", "button")?;
    Ok(button)
}

fn element(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<HtmlElement, JsValue> {
    let element = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    element.set_class_name(class);
    Ok(element)
}
