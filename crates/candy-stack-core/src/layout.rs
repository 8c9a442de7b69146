//! Scene geometry
//!
//! Pure layout math for the dispenser window: where the buttons are, where
//! the frame and spring go, and where each candy is drawn. The renderer only
//! turns these rectangles into paths.

use crate::candy::Candy;
use crate::command::Command;
use crate::config::DispenserConfig;
use crate::spring::Spring;
use crate::stack::Stack;

/// Button size in the command panel
pub const BUTTON_SIZE: Size = Size {
    width: 150.0,
    height: 50.0,
};
/// Left edge of the command panel
const BUTTON_X: f32 = 10.0;
/// Top edge of the first button
const BUTTON_Y: f32 = 10.0;
/// Distance between the tops of consecutive buttons
const BUTTON_PITCH: f32 = 60.0;
/// Top-left corner of the status text
pub const STATUS_POSITION: Point = Point { x: 750.0, y: 100.0 };
/// Stroke width of the spring's top plate
pub const PLATE_THICKNESS: f32 = 8.0;
/// Labels are drawn this far left of their candy
const LABEL_OFFSET_X: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle, `y` growing downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A labeled button region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub bounds: Rect,
}

/// The column of command buttons on the left of the window
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPanel {
    buttons: Vec<Button>,
}

impl Default for ButtonPanel {
    fn default() -> Self {
        let buttons = Command::BUTTONS
            .iter()
            .enumerate()
            .map(|(i, command)| Button {
                label: command.label(),
                bounds: Rect::new(
                    BUTTON_X,
                    BUTTON_Y + BUTTON_PITCH * i as f32,
                    BUTTON_SIZE.width,
                    BUTTON_SIZE.height,
                ),
            })
            .collect();
        Self { buttons }
    }
}

impl ButtonPanel {
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Command for the button under `point`, if any
    pub fn hit_test(&self, point: Point) -> Option<Command> {
        self.buttons
            .iter()
            .find(|button| button.bounds.contains(point))
            .and_then(|button| Command::from_label(button.label))
    }
}

/// Where a single candy lands on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandySlot<'a> {
    pub candy: &'a Candy,
    /// Bounding box of the candy ellipse
    pub bounds: Rect,
    /// Top-left corner of the label text
    pub label_position: Point,
}

/// Fixed geometry of the dispenser derived from the config
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    window: Size,
    candy: Size,
    candy_gap: f32,
    spring_width: f32,
    max_extension: f32,
}

impl SceneLayout {
    pub fn new(config: &DispenserConfig) -> Self {
        Self {
            window: Size {
                width: config.window.width as f32,
                height: config.window.height as f32,
            },
            candy: Size {
                width: config.candy.width,
                height: config.candy.height,
            },
            candy_gap: config.candy.gap,
            spring_width: config.spring.width,
            max_extension: config.spring.max_extension,
        }
    }

    fn center_x(&self) -> f32 {
        (self.window.width / 2.0).floor()
    }

    /// Top of the uncompressed spring and of the dispenser frame
    fn base_y(&self) -> f32 {
        (self.window.height / 2.0).floor()
    }

    /// The dispenser frame: an open-top box four springs wide
    pub fn frame(&self) -> Rect {
        let width = self.spring_width * 4.0;
        Rect::new(
            self.center_x() - width / 2.0,
            self.base_y(),
            width,
            self.max_extension,
        )
    }

    /// Frame outline as a polyline: down the left wall, across the floor,
    /// up the right wall
    pub fn frame_outline(&self) -> [Point; 4] {
        let frame = self.frame();
        [
            Point::new(frame.x, frame.y),
            Point::new(frame.x, frame.y + frame.height),
            Point::new(frame.x + frame.width, frame.y + frame.height),
            Point::new(frame.x + frame.width, frame.y),
        ]
    }

    /// y of the spring's top plate
    pub fn spring_top(&self, spring: &Spring) -> f32 {
        self.base_y() + spring.compression()
    }

    /// Region the spring coil occupies
    pub fn spring_bounds(&self, spring: &Spring) -> Rect {
        Rect::new(
            self.center_x() - self.spring_width / 2.0,
            self.spring_top(spring),
            self.spring_width,
            spring.extension(),
        )
    }

    /// The top plate runs across the full frame width
    pub fn plate(&self, spring: &Spring) -> (Point, Point) {
        let frame = self.frame();
        let y = self.spring_top(spring);
        (Point::new(frame.x, y), Point::new(frame.x + frame.width, y))
    }

    /// Candy positions, bottom candy first, stacked upward from the plate
    pub fn candy_slots<'a>(
        &self,
        candies: &'a Stack<Candy>,
        spring: &Spring,
    ) -> impl Iterator<Item = CandySlot<'a>> + 'a {
        let x = self.center_x() - (self.candy.width / 2.0).floor();
        let first_y = self.spring_top(spring) - self.candy.height;
        let pitch = self.candy.height + self.candy_gap;
        let size = self.candy;

        candies
            .iter()
            .rev()
            .enumerate()
            .map(move |(i, candy)| {
                let y = first_y - pitch * i as f32;
                CandySlot {
                    candy,
                    bounds: Rect::new(x, y, size.width, size.height),
                    label_position: Point::new(x - LABEL_OFFSET_X, y + 5.0),
                }
            })
    }
}
