//! Canvas rendering of the dispenser
//!
//! Everything in the window is drawn on one canvas: the button panel, the
//! status line, the dispenser frame, the spring and the candies. Positions
//! come from [`SceneLayout`]; this module only draws and hit-tests clicks.

use std::f32::consts::PI;

use candy_stack_core::{layout, ButtonPanel, Dispenser, Rgb, SceneLayout, Tone};
use iced::alignment::{Horizontal, Vertical};
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, path::arc, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Element, Event, Length, Radians, Rectangle, Renderer, Theme, Vector};

use crate::app::{DispenserApp, Message};

const FONT_SIZE: f32 = 20.0;
const OUTLINE_WIDTH: f32 = 2.0;
/// Number of zigzag turns in the spring coil
const COIL_TURNS: usize = 12;
/// Straight lead at each end of the coil
const COIL_LEAD: f32 = 6.0;
const COIL_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.4);

/// Canvas program that draws the dispenser
struct DispenserScene<'a> {
    dispenser: &'a Dispenser,
    layout: &'a SceneLayout,
    buttons: &'a ButtonPanel,
    cache: &'a canvas::Cache,
}

impl canvas::Program<Message> for DispenserScene<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Option<canvas::Action<Message>> {
        let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event else {
            return None;
        };
        let position = cursor.position_in(bounds)?;
        let command = self
            .buttons
            .hit_test(layout::Point::new(position.x, position.y))?;
        Some(canvas::Action::publish(Message::Command(command)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), Color::WHITE);

            self.draw_frame(frame);
            self.draw_status(frame);
            self.draw_spring(frame);
            self.draw_candies(frame);
            self.draw_buttons(frame);
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(p) if self.buttons.hit_test(layout::Point::new(p.x, p.y)).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl DispenserScene<'_> {
    /// Open-top U of the dispenser body
    fn draw_frame(&self, frame: &mut Frame) {
        let [a, b, c, d] = self.layout.frame_outline().map(point);
        let outline = Path::new(|builder| {
            builder.move_to(a);
            builder.line_to(b);
            builder.line_to(c);
            builder.line_to(d);
        });
        frame.stroke(&outline, outline_stroke(Color::BLACK));
    }

    fn draw_status(&self, frame: &mut Frame) {
        let display = self.dispenser.display();
        let Some(message) = display.message() else {
            return;
        };
        let color = match display.tone() {
            Tone::Normal => Color::BLACK,
            Tone::Error => color(Rgb::RED),
        };
        frame.fill_text(Text {
            content: message.to_string(),
            position: point(layout::STATUS_POSITION),
            color,
            size: FONT_SIZE.into(),
            ..Text::default()
        });
    }

    /// Zigzag coil filling the spring bounds, topped by the plate
    fn draw_spring(&self, frame: &mut Frame) {
        let spring = self.dispenser.spring();
        let bounds = self.layout.spring_bounds(spring);
        let left = bounds.x;
        let right = bounds.x + bounds.width;
        let mid = bounds.x + bounds.width / 2.0;
        let top = bounds.y;
        let bottom = bounds.y + bounds.height;
        let lead = COIL_LEAD.min(bounds.height / 4.0);
        let pitch = (bounds.height - 2.0 * lead) / (COIL_TURNS * 2) as f32;

        let coil = Path::new(|builder| {
            builder.move_to(iced::Point::new(mid, bottom));
            builder.line_to(iced::Point::new(mid, bottom - lead));
            for i in 0..COIL_TURNS * 2 {
                let x = if i % 2 == 0 { left } else { right };
                let y = bottom - lead - pitch * (i as f32 + 0.5);
                builder.line_to(iced::Point::new(x, y));
            }
            builder.line_to(iced::Point::new(mid, top + lead));
            builder.line_to(iced::Point::new(mid, top));
        });
        frame.stroke(&coil, outline_stroke(COIL_COLOR));

        let (from, to) = self.layout.plate(spring);
        frame.stroke(
            &Path::line(point(from), point(to)),
            Stroke::default()
                .with_color(Color::BLACK)
                .with_width(layout::PLATE_THICKNESS),
        );
    }

    /// Candy ellipses from the plate upward, each with its label
    fn draw_candies(&self, frame: &mut Frame) {
        let slots = self
            .layout
            .candy_slots(self.dispenser.candies(), self.dispenser.spring());

        for slot in slots {
            let bounds = slot.bounds;
            let center = point(bounds.center());
            let candy = Path::new(|builder| {
                builder.ellipse(arc::Elliptical {
                    center,
                    radii: Vector::new(bounds.width / 2.0, bounds.height / 2.0),
                    rotation: Radians(0.0),
                    start_angle: Radians(0.0),
                    end_angle: Radians(2.0 * PI),
                });
            });
            frame.fill(&candy, color(slot.candy.color()));

            frame.fill_text(Text {
                content: slot.candy.label().to_string(),
                position: point(slot.label_position),
                color: Color::BLACK,
                size: FONT_SIZE.into(),
                ..Text::default()
            });
        }
    }

    fn draw_buttons(&self, frame: &mut Frame) {
        for button in self.buttons.buttons() {
            let bounds = button.bounds;
            let outline = Path::rectangle(
                point(bounds.top_left()),
                iced::Size::new(bounds.width, bounds.height),
            );
            frame.stroke(&outline, outline_stroke(Color::BLACK));

            frame.fill_text(Text {
                content: button.label.to_string(),
                position: point(bounds.center()),
                color: Color::BLACK,
                size: FONT_SIZE.into(),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
        }
    }
}

fn point(p: layout::Point) -> iced::Point {
    iced::Point::new(p.x, p.y)
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

fn outline_stroke(color: Color) -> Stroke<'static> {
    Stroke::default().with_color(color).with_width(OUTLINE_WIDTH)
}

/// Full-window canvas showing the dispenser
pub fn scene(app: &DispenserApp) -> Element<'_, Message> {
    Canvas::new(DispenserScene {
        dispenser: app.dispenser(),
        layout: app.layout(),
        buttons: app.buttons(),
        cache: app.scene_cache(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
