//! Render surface adapter: applies published progress to tagged elements.
//!
//! Only discrete values are written here; CSS transitions on the page do
//! the easing between them.

use crate::constants::*;
use crate::dom::{self, js_err, set_style};
use glam::Vec2;
use scrollfx_core::constants::{STAR_COUNT, STAR_SEED};
use scrollfx_core::content::{skill_timeline, tagline_words};
use scrollfx_core::timeline::*;
use scrollfx_core::{starfield, PointerState, ProgressSnapshot, SectionId};
use wasm_bindgen::JsCast;
use web_sys as web;

struct SkillEls {
    index: usize,
    item: TimelineItem,
    card: Option<web::HtmlElement>,
    star: Option<web::HtmlElement>,
    burst: Option<web::HtmlElement>,
}

pub struct Renderer {
    root: web::HtmlElement,
    hero_backdrop: Option<web::HtmlElement>,
    hero_copy: Option<web::HtmlElement>,
    portrait: Option<web::HtmlElement>,
    glow: Option<web::HtmlElement>,
    aurora: Option<web::HtmlElement>,
    intro_heading: Option<web::HtmlElement>,
    words: Vec<web::HtmlElement>,
    space: Option<web::HtmlElement>,
    trail: Option<web::Element>,
    skills: Vec<SkillEls>,
    journey_end: Option<web::HtmlElement>,
    contact_backdrop: Option<web::HtmlElement>,
    contact_copy: Option<web::HtmlElement>,
    last: Option<ProgressSnapshot>,
}

impl Renderer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;

        if let Some(container) = dom::fx(&root, FX_TAGLINE) {
            fill_tagline(document, &container)?;
        }
        let items = skill_timeline()?;
        if let Some(container) = dom::fx(&root, FX_SKILLS) {
            fill_skills(document, &container, &items)?;
        }
        let space = dom::fx(&root, FX_SPACE);
        if let Some(space) = &space {
            fill_stars(document, space)?;
        }

        let skills: Vec<SkillEls> = dom::query_all_html(&root, &format!("[{}]", SKILL_ATTR))
            .into_iter()
            .filter_map(|el| {
                let index = el.get_attribute(SKILL_ATTR)?.parse::<usize>().ok()?;
                let item = items.get(index)?.clone();
                Some(SkillEls {
                    index,
                    item,
                    card: dom::fx(&el, FX_SKILL_CARD),
                    star: dom::fx(&el, FX_SKILL_STAR),
                    burst: dom::fx(&el, FX_SKILL_BURST),
                })
            })
            .collect();

        // SVG path, so not an HtmlElement.
        let trail = dom::fx_element(&root, FX_TRAIL);
        if let Some(el) = &trail {
            _ = el.set_attribute(TRAIL_DASHARRAY_ATTR, &format!("{:.0}", trail_dash_array()));
        }

        let words = dom::query_all_html(&root, &format!("[{}]", WORD_ATTR));
        log::info!(
            "[render] words={} skills={} stars={}",
            words.len(),
            skills.len(),
            space.as_ref().map_or(0, |s| s.child_element_count())
        );

        Ok(Self {
            hero_backdrop: dom::fx(&root, FX_HERO_BACKDROP),
            hero_copy: dom::fx(&root, FX_HERO_COPY),
            portrait: dom::fx(&root, FX_PORTRAIT),
            glow: dom::fx(&root, FX_GLOW),
            aurora: dom::fx(&root, FX_AURORA),
            intro_heading: dom::fx(&root, FX_INTRO_HEADING),
            words,
            space,
            trail,
            skills,
            journey_end: dom::fx(&root, FX_JOURNEY_END),
            contact_backdrop: dom::fx(&root, FX_CONTACT_BACKDROP),
            contact_copy: dom::fx(&root, FX_CONTACT_COPY),
            root: root.dyn_into::<web::HtmlElement>().map_err(|e| js_err(e.into()))?,
            last: None,
        })
    }

    /// Write everything that changed since the previous snapshot.
    pub fn render(&mut self, snap: &ProgressSnapshot) {
        let prev = self.last.replace(*snap);
        let changed = |id: SectionId| prev.map_or(true, |p| p.section(id) != snap.section(id));

        if changed(SectionId::Hero) {
            self.render_hero(snap.section(SectionId::Hero));
        }
        if changed(SectionId::Intro) {
            self.render_intro(snap.section(SectionId::Intro));
        }
        if changed(SectionId::Skills) {
            self.render_skills(snap.section(SectionId::Skills));
        }
        if changed(SectionId::Contact) {
            self.render_contact(snap.section(SectionId::Contact));
        }
        if prev.map_or(true, |p| p.pointer != snap.pointer) {
            self.render_pointer(snap.pointer);
        }
        if prev.map_or(true, |p| p.scroll.current != snap.scroll.current) {
            set_style(&self.root, SCROLL_VAR, &format!("{:.1}px", snap.scroll.current));
        }
    }

    fn render_hero(&self, p: f32) {
        if let Some(el) = &self.hero_backdrop {
            apply_entrance(el, &hero_backdrop(p));
        }
        if let Some(el) = &self.hero_copy {
            apply_entrance(el, &hero_copy(p));
        }
        if let Some(el) = &self.portrait {
            set_style(el, "opacity", &format!("{:.3}", hero_copy(p).opacity));
        }
    }

    fn render_pointer(&self, pointer: PointerState) {
        if let Some(el) = &self.portrait {
            set_style(el, "transform", &translate(pointer.portrait_offset()));
        }
        let c = pointer.glow_center_percent();
        if let Some(el) = &self.glow {
            set_style(el, "left", &format!("{:.3}%", c.x));
            set_style(el, "top", &format!("{:.3}%", c.y));
        }
        if let Some(el) = &self.aurora {
            let mask = format!(
                "radial-gradient(circle {}px at {:.3}% {:.3}%, black 0%, transparent 100%)",
                AURORA_MASK_RADIUS_PX, c.x, c.y
            );
            set_style(el, "mask-image", &mask);
            set_style(el, "-webkit-mask-image", &mask);
        }
    }

    fn render_intro(&self, p: f32) {
        if let Some(el) = &self.intro_heading {
            apply_entrance(el, &intro_heading(p));
        }
        let total = self.words.len();
        for (i, el) in self.words.iter().enumerate() {
            let s = word_reveal(i, total, p);
            set_style(el, "opacity", &format!("{:.3}", s.opacity));
            set_style(el, "filter", &format!("blur({:.2}px)", s.blur_px));
            set_style(el, "transform", &translate(s.translate));
        }
    }

    fn render_skills(&self, p: f32) {
        if let Some(el) = &self.space {
            let shown = backdrop_visible(p);
            set_style(el, "opacity", if shown { "1" } else { "0" });
            let z = if shown { SPACE_Z_SHOWN } else { SPACE_Z_HIDDEN };
            set_style(el, "z-index", &z.to_string());
        }
        if let Some(el) = &self.trail {
            _ = el.set_attribute(TRAIL_DASHOFFSET_ATTR, &format!("{:.1}", trail_dash_offset(p)));
        }
        for s in &self.skills {
            let state = skill_state(&s.item, s.index, p);
            if let Some(card) = &s.card {
                if state.card.visible {
                    set_style(card, "display", "");
                    set_style(card, "opacity", &format!("{:.3}", state.card.opacity));
                    set_style(
                        card,
                        "transform",
                        &format!("translateX({:.2}px) translateY(-50%)", state.card.translate.x),
                    );
                } else {
                    set_style(card, "display", "none");
                }
            }
            if let Some(star) = &s.star {
                match state.formation {
                    Some(f) => {
                        set_style(star, "display", "");
                        set_style(star, "opacity", &format!("{:.3}", f.opacity));
                        set_style(star, "transform", &format!("scale({:.3})", f.scale));
                    }
                    None => set_style(star, "display", "none"),
                }
            }
            if let Some(burst) = &s.burst {
                let cl = burst.class_list();
                _ = if state.card.explosion_active {
                    cl.add_1(EXPLODING_CLASS)
                } else {
                    cl.remove_1(EXPLODING_CLASS)
                };
            }
        }
        if let Some(el) = &self.journey_end {
            apply_entrance(el, &journey_end(p));
        }
    }

    fn render_contact(&self, p: f32) {
        if let Some(el) = &self.contact_backdrop {
            apply_entrance(el, &contact_backdrop(p));
        }
        if let Some(el) = &self.contact_copy {
            apply_entrance(el, &contact_copy(p));
        }
    }
}

#[inline]
fn translate(v: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", v.x, v.y)
}

fn apply_entrance(el: &web::HtmlElement, e: &Entrance) {
    set_style(el, "opacity", &format!("{:.3}", e.opacity));
    let transform = if e.scale != 1.0 {
        format!("{} scale({:.4})", translate(e.translate), e.scale)
    } else {
        translate(e.translate)
    };
    set_style(el, "transform", &transform);
}

fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| js_err(e.into()))
}

fn fill_tagline(document: &web::Document, container: &web::HtmlElement) -> anyhow::Result<()> {
    if container.child_element_count() > 0 {
        return Ok(());
    }
    for (i, word) in tagline_words().into_iter().enumerate() {
        let span = document.create_element("span").map_err(js_err)?;
        span.set_class_name(WORD_CLASS);
        span.set_attribute(WORD_ATTR, &i.to_string()).map_err(js_err)?;
        span.set_text_content(Some(word));
        container.append_child(&span).map_err(js_err)?;
    }
    Ok(())
}

fn fill_skills(
    document: &web::Document,
    container: &web::HtmlElement,
    items: &[TimelineItem],
) -> anyhow::Result<()> {
    if container.child_element_count() > 0 {
        return Ok(());
    }
    for (i, item) in items.iter().enumerate() {
        let row = create_div(document)?;
        row.set_attribute(SKILL_ATTR, &i.to_string()).map_err(js_err)?;
        set_style(&row, "top", &format!("{}%", item.pos));

        let star = create_div(document)?;
        star.set_attribute(FX_ATTR, FX_SKILL_STAR).map_err(js_err)?;
        set_style(&star, "left", &format!("{}%", item.lateral_x));
        set_style(&star, "display", "none");

        let burst = create_div(document)?;
        burst.set_attribute(FX_ATTR, FX_SKILL_BURST).map_err(js_err)?;
        set_style(&burst, "left", &format!("{}%", item.lateral_x));

        let card = create_div(document)?;
        card.set_attribute(FX_ATTR, FX_SKILL_CARD).map_err(js_err)?;
        card.set_class_name(if is_left(i) { "left" } else { "right" });
        set_style(&card, "display", "none");
        let title = document.create_element("h4").map_err(js_err)?;
        title.set_text_content(Some(item.label.as_str()));
        let desc = document.create_element("p").map_err(js_err)?;
        desc.set_text_content(Some(item.description.as_str()));
        card.append_child(&title).map_err(js_err)?;
        card.append_child(&desc).map_err(js_err)?;

        row.append_child(&burst).map_err(js_err)?;
        row.append_child(&star).map_err(js_err)?;
        row.append_child(&card).map_err(js_err)?;
        container.append_child(&row).map_err(js_err)?;
    }
    Ok(())
}

fn fill_stars(document: &web::Document, space: &web::HtmlElement) -> anyhow::Result<()> {
    if space.child_element_count() > 0 {
        return Ok(());
    }
    for star in starfield::generate(STAR_COUNT, STAR_SEED) {
        let el = create_div(document)?;
        el.set_class_name(STAR_CLASS);
        set_style(&el, "width", &format!("{:.2}px", star.width_px));
        set_style(&el, "height", &format!("{:.2}px", star.height_px));
        set_style(&el, "top", &format!("{:.2}%", star.top_percent));
        set_style(&el, "left", &format!("{:.2}%", star.left_percent));
        set_style(&el, "animation-delay", &format!("{:.2}s", star.delay_sec));
        set_style(&el, "animation-duration", &format!("{:.2}s", star.duration_sec));
        set_style(&el, "opacity", &format!("{:.2}", star.opacity));
        space.append_child(&el).map_err(js_err)?;
    }
    Ok(())
}
