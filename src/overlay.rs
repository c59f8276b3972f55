use crate::constants::*;
use crate::dom;
use web_sys as web;

/// Build the intro section and append it to `<body>`. Clicking its button
/// hides the intro and reveals the portfolio content.
pub fn mount_intro(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let section = document
        .create_element("section")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    section.set_class_name(INTRO_CLASS);

    let button = dom::text_element(document, "button", OPEN_PORTFOLIO_LABEL)
        .ok_or_else(|| anyhow::anyhow!("could not create intro button"))?;
    button.set_id(OPEN_PORTFOLIO_BUTTON_ID);

    for child in [
        dom::text_element(document, "h1", INTRO_TITLE),
        dom::text_element(document, "p", INTRO_DESCRIPTION),
        Some(button),
    ]
    .into_iter()
    .flatten()
    {
        _ = section.append_child(&child);
    }
    body.append_child(&section)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let intro = section.clone();
    dom::add_click_listener(document, OPEN_PORTFOLIO_BUTTON_ID, move || {
        hide_intro(&intro);
    });
    Ok(())
}

fn hide_intro(intro: &web::Element) {
    dom::set_display(intro, "none");
    if let Some(content) =
        dom::window_document().and_then(|d| d.get_element_by_id(PORTFOLIO_CONTENT_ID))
    {
        dom::set_display(&content, "block");
    }
    log::info!("[ui] portfolio revealed");
}

/// Show exactly one of the two canvases; `first` selects which.
pub fn show_canvas(
    first: &web::HtmlCanvasElement,
    second: &web::HtmlCanvasElement,
    show_first: bool,
) {
    let (shown, hidden) = if show_first {
        (first, second)
    } else {
        (second, first)
    };
    dom::set_display(hidden, "none");
    dom::set_display(shown, "block");
    // hidden canvases collapse to 1px; re-measure the one becoming visible
    dom::sync_canvas_backing_size(shown);
}

/// Wire `#toggleSceneBtn` to swap between the two scene canvases.
pub fn wire_scene_toggle(
    document: &web::Document,
    snow_canvas: web::HtmlCanvasElement,
    showcase_canvas: web::HtmlCanvasElement,
) {
    dom::add_click_listener(document, TOGGLE_SCENE_BUTTON_ID, move || {
        let show_snow = !dom::is_displayed(&snow_canvas);
        show_canvas(&snow_canvas, &showcase_canvas, show_snow);
        log::info!(
            "[ui] showing {} scene",
            if show_snow { "snow" } else { "showcase" }
        );
    });
}
