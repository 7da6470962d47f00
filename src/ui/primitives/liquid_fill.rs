//! Liquid fill primitive
//!
//! A low-level widget that paints a rounded, squash-and-stretch container
//! with a bottom-anchored fill, and reports drag displacements measured
//! from where the pointer went down.
//!
//! # Design
//!
//! This is a primitive component - it uses generic Message types and
//! does not know what the displacement means. The caller supplies a
//! [`FillShape`] already resolved for the current frame.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::border::{self, Border};
use iced::event::Event;
use iced::{Background, Color, Element, Length, Point, Rectangle, Size, Theme, Vector};
use iced::{mouse, touch};

use crate::ui::theme;

/// Resolved shape of the control for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillShape {
    /// Frame of the container before the scale transform
    pub frame: Size,
    /// Height of the fill inside `frame`
    pub fill_height: f32,
    pub corner_radius: f32,
    /// Scale applied about the container centre
    pub scale_x: f32,
    pub scale_y: f32,
    /// Translation applied after scaling
    pub offset_y: f32,
    pub track_color: Color,
    pub fill_color: Color,
}

impl FillShape {
    /// On-screen container rectangle when centred on `center`
    pub fn placed(&self, center: Point) -> Rectangle {
        let width = self.frame.width * self.scale_x;
        let height = self.frame.height * self.scale_y;
        Rectangle {
            x: center.x - width / 2.0,
            y: center.y + self.offset_y - height / 2.0,
            width,
            height,
        }
    }

    /// On-screen fill rectangle inside `placed`
    pub fn fill_bounds(&self, placed: Rectangle) -> Rectangle {
        let height = (self.fill_height * self.scale_y).clamp(0.0, placed.height);
        Rectangle {
            y: placed.y + placed.height - height,
            height,
            ..placed
        }
    }

    /// Corner radius after scaling, limited by the narrower axis
    pub fn scaled_radius(&self) -> f32 {
        self.corner_radius * self.scale_x.min(self.scale_y)
    }

    /// Radii for the fill so it follows the container's rounded clip
    fn fill_radius(&self, placed: Rectangle, fill: Rectangle) -> border::Radius {
        let radius = self.scaled_radius();
        let gap = placed.height - fill.height;
        let top = (radius - gap).max(0.0);
        let bottom = radius.min(fill.height);
        border::Radius {
            top_left: top,
            top_right: top,
            bottom_right: bottom,
            bottom_left: bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    pointer: Pointer,
    origin: Point,
    last: Vector,
}

/// State for the liquid fill
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    drag: Option<Drag>,
}

/// Draggable liquid fill
pub struct LiquidFill<'a, Message> {
    shape: FillShape,
    on_drag: Box<dyn Fn(Vector) -> Message + 'a>,
    on_release: Box<dyn Fn(Vector) -> Message + 'a>,
    width: Length,
    height: Length,
}

impl<'a, Message> LiquidFill<'a, Message> {
    pub fn new<F, R>(shape: FillShape, on_drag: F, on_release: R) -> Self
    where
        F: Fn(Vector) -> Message + 'a,
        R: Fn(Vector) -> Message + 'a,
    {
        Self {
            shape,
            on_drag: Box::new(on_drag),
            on_release: Box::new(on_release),
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn begin(
        &self,
        state: &mut State,
        pointer: Pointer,
        position: Point,
        bounds: Rectangle,
    ) -> bool {
        if state.drag.is_some() || !self.shape.placed(bounds.center()).contains(position) {
            return false;
        }
        tracing::debug!("Drag started with {:?}", pointer);
        state.drag = Some(Drag {
            pointer,
            origin: position,
            last: Vector::ZERO,
        });
        true
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for LiquidFill<'a, Message>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let size = limits.resolve(self.width, self.height, self.shape.frame);
        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    if self.begin(state, Pointer::Mouse, position, bounds) {
                        shell.capture_event();
                    }
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if self.begin(state, Pointer::Finger(*id), *position, bounds) {
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(drag) = state.drag.as_mut().filter(|d| d.pointer == Pointer::Mouse) {
                    drag.last = *position - drag.origin;
                    shell.publish((self.on_drag)(drag.last));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if let Some(drag) = state
                    .drag
                    .as_mut()
                    .filter(|d| d.pointer == Pointer::Finger(*id))
                {
                    drag.last = *position - drag.origin;
                    shell.publish((self.on_drag)(drag.last));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if let Some(drag) = state.drag.filter(|d| d.pointer == Pointer::Mouse) {
                    let displacement = cursor
                        .position()
                        .map(|position| position - drag.origin)
                        .unwrap_or(drag.last);
                    state.drag = None;
                    shell.publish((self.on_release)(displacement));
                    shell.capture_event();
                }
            }
            Event::Touch(
                touch::Event::FingerLifted { id, position }
                | touch::Event::FingerLost { id, position },
            ) => {
                if let Some(drag) = state.drag.filter(|d| d.pointer == Pointer::Finger(*id)) {
                    state.drag = None;
                    shell.publish((self.on_release)(*position - drag.origin));
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let placed = self.shape.placed(bounds.center());
        let radius = self.shape.scaled_radius();

        // Track
        renderer.fill_quad(
            renderer::Quad {
                bounds: placed,
                border: Border::default()
                    .rounded(radius)
                    .width(1.0)
                    .color(theme::TRACK_RIM),
                ..Default::default()
            },
            Background::Color(self.shape.track_color),
        );

        // Liquid
        let fill = self.shape.fill_bounds(placed);
        if fill.height > 0.0 {
            renderer.with_layer(placed, |renderer| {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: fill,
                        border: Border::default().rounded(self.shape.fill_radius(placed, fill)),
                        ..Default::default()
                    },
                    Background::Color(self.shape.fill_color),
                );
            });
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let placed = self.shape.placed(layout.bounds().center());

        if state.drag.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(placed) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<LiquidFill<'a, Message>> for Element<'a, Message, Theme>
where
    Message: 'a,
{
    fn from(fill: LiquidFill<'a, Message>) -> Self {
        Element::new(fill)
    }
}

/// Creates a new liquid fill
pub fn liquid_fill<'a, Message>(
    shape: FillShape,
    on_drag: impl Fn(Vector) -> Message + 'a,
    on_release: impl Fn(Vector) -> Message + 'a,
) -> LiquidFill<'a, Message> {
    LiquidFill::new(shape, on_drag, on_release)
}
