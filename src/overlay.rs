use crate::core::contact::{ContactFlow, TransmissionPhase};
use crate::core::content::{self, escape_html, CHANNELS};
use crate::core::loading::LoadTracker;
use crate::core::scene::HoverLabel;
use crate::core::OverlayView;
use crate::dom;
use glam::Vec2;
use web_sys as web;

const HIDDEN: &str = "hidden";

fn css_rgb(c: [f32; 3]) -> String {
    format!(
        "rgb({}, {}, {})",
        (c[0].clamp(0.0, 1.0) * 255.0) as u8,
        (c[1].clamp(0.0, 1.0) * 255.0) as u8,
        (c[2].clamp(0.0, 1.0) * 255.0) as u8
    )
}

fn highlight_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect()
}

fn overlay_html(view: &OverlayView) -> String {
    match view {
        OverlayView::Sun(sun) => format!(
            "<h2 class='title sun'>{}</h2>\
             <p class='subtitle'>{}</p>\
             <p>{}</p>\
             <p class='muted'>{}</p>\
             <div class='links'>\
               <a href='mailto:{}'>Email</a>\
               <a href='{}' target='_blank' rel='noopener'>LinkedIn</a>\
               <a href='{}' target='_blank' rel='noopener'>GitHub</a>\
             </div>",
            escape_html(sun.name),
            escape_html(sun.tagline),
            escape_html(sun.summary),
            escape_html(sun.affiliation),
            escape_html(sun.email),
            escape_html(sun.linkedin),
            escape_html(content::GITHUB_URL),
        ),
        OverlayView::Planet { payload, color, .. } => format!(
            "<h2 class='title' style='color:{}'>{}</h2>\
             <p class='subtitle'>{}</p>\
             <p class='muted'>{}</p>\
             <p>{}</p>\
             <ul class='highlights'>{}</ul>",
            css_rgb(*color),
            escape_html(payload.title),
            escape_html(payload.role),
            escape_html(payload.timeline),
            escape_html(payload.description),
            highlight_list(payload.highlights),
        ),
    }
}

/// Show the focus modal for `view`, or hide it for the overview.
pub fn render_focus(document: &web::Document, view: Option<&OverlayView>) {
    match view {
        Some(v) => {
            if let Some(el) = document.get_element_by_id("focus-content") {
                el.set_inner_html(&overlay_html(v));
            }
            dom::set_class(document, "focus-overlay", HIDDEN, false);
        }
        None => dom::set_class(document, "focus-overlay", HIDDEN, true),
    }
}

/// Position the hover label at `at` (CSS px relative to the canvas).
pub fn render_hover_label(document: &web::Document, label: Option<(&HoverLabel, Vec2)>) {
    let Some((label, at)) = label else {
        dom::set_class(document, "hover-label", HIDDEN, true);
        return;
    };
    if let Some(el) = document.get_element_by_id("hover-label") {
        let body = match label.subtitle {
            Some(sub) => format!(
                "<strong>{}</strong><br><span>{}</span>",
                escape_html(label.title),
                escape_html(sub)
            ),
            None => format!("<strong>{}</strong>", escape_html(label.title)),
        };
        el.set_inner_html(&body);
    }
    dom::set_style(document, "hover-label", "left", &format!("{:.0}px", at.x));
    dom::set_style(document, "hover-label", "top", &format!("{:.0}px", at.y));
    dom::set_style(
        document,
        "hover-label",
        "opacity",
        &format!("{:.2}", label.opacity.clamp(0.0, 1.0)),
    );
    dom::set_class(document, "hover-label", HIDDEN, false);
}

pub fn render_loading(document: &web::Document, tracker: &LoadTracker) {
    let pct = tracker.progress_percent();
    dom::set_style(document, "loading-bar", "width", &format!("{:.0}%", pct));
    if tracker.show_welcome() {
        dom::set_text(document, "loading-text", "Welcome to my universe");
    } else {
        dom::set_text(
            document,
            "loading-text",
            &format!("Loading the cosmos... {:.0}%", pct),
        );
    }
}

pub fn hide_loading(document: &web::Document) {
    dom::set_class(document, "loading-screen", HIDDEN, true);
}

/// Fill the contact panel's outbound channel list. Called once at startup.
pub fn render_channels(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("contact-channels") {
        let html: String = CHANNELS
            .iter()
            .map(|c| {
                format!(
                    "<a class='channel' id='channel-{}' href='{}' target='_blank' rel='noopener' style='border-color:{}'>\
                     <strong>{}</strong><span>{}</span></a>",
                    escape_html(c.id),
                    escape_html(c.link),
                    escape_html(c.color),
                    escape_html(c.name),
                    escape_html(c.description),
                )
            })
            .collect();
        el.set_inner_html(&html);
    }
}

/// Reflect the simulated transmission phase in the panel.
pub fn render_contact(document: &web::Document, flow: &ContactFlow) {
    let (status, busy) = match flow.phase() {
        TransmissionPhase::Idle => ("", false),
        TransmissionPhase::Transmitting { .. } => ("Transmitting across the cosmos...", true),
        TransmissionPhase::Complete { .. } => ("Message received. Thanks for reaching out!", true),
    };
    dom::set_text(document, "contact-status", status);
    if let Some(el) = document.get_element_by_id("contact-submit") {
        if busy {
            _ = el.set_attribute("disabled", "");
        } else {
            _ = el.remove_attribute("disabled");
        }
    }
}

#[inline]
pub fn toggle(document: &web::Document, element_id: &str) {
    let hidden = dom::has_class(document, element_id, HIDDEN);
    dom::set_class(document, element_id, HIDDEN, !hidden);
}

#[inline]
pub fn toggle_hint(document: &web::Document) {
    toggle(document, "hint-overlay");
}

#[inline]
pub fn toggle_contact(document: &web::Document) {
    toggle(document, "contact-panel");
}

#[inline]
pub fn hide_contact(document: &web::Document) {
    dom::set_class(document, "contact-panel", HIDDEN, true);
}
