// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, back to front: particles, the visible panel, the heart burst.

use super::{App, Message};
use crate::ui::styles;
use crate::ui::widgets::{HeartOverlay, ParticleField};
use crate::ui::{intro, slideshow};
use iced::widget::{container, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn render(&self) -> Element<'_, Message> {
        let now = self.now;
        let stage = self.stage();
        let pulse = self.ambience.pulse(now);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
        layers = layers.push(
            ParticleField::new(self.ambience.particles(), self.ambience.elapsed(now))
                .into_element(),
        );

        if stage.intro.visible {
            let panel = intro::view(intro::ViewContext {
                i18n: &self.i18n,
                intro: self.card.intro.as_ref(),
                animation: stage.intro.animation,
                ripple: stage.ripple,
                pulse,
                warning: self.warning.clone(),
                content_opacity: self.ambience.content_opacity(now),
                now,
            });
            layers = layers.push(panel.map(Message::Intro));
        }

        if stage.slideshow.visible {
            let panel = slideshow::view(slideshow::ViewContext {
                i18n: &self.i18n,
                card: &self.card,
                stage,
                images: &self.images,
                pulse,
                now,
            });
            layers = layers.push(panel.map(Message::Slideshow));
        }

        if let Some(burst) = stage.live_heart_burst(now) {
            layers = layers.push(HeartOverlay::new(burst, now).into_element());
        }

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop)
            .into()
    }
}
