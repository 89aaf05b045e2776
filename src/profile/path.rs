use crate::error::{InvalidStateError, Result};
use crate::math::Point2;

/// One drawing command of a planar outline.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    /// Smooth curve through `points`. With `include_current` the curve starts
    /// at the current point, otherwise it starts at `points[0]`.
    SplineThrough {
        points: Vec<Point2>,
        include_current: bool,
    },
    /// Straight segment back to the initial `MoveTo`.
    Close,
}

/// Lifecycle of a [`ProfileBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Building,
    Closed,
}

/// A finished, closed outline.
///
/// Only [`ProfileBuilder::close`] produces one, so the last command is
/// always the single [`PathCommand::Close`].
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    commands: Vec<PathCommand>,
}

impl Profile {
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Number of commands, including the opening move and the close.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The point the outline starts from and closes back to.
    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    #[must_use]
    pub fn spline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::SplineThrough { .. }))
            .count()
    }

    /// Every explicit vertex in drawing order; spline points are listed as given.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.push(*p),
                PathCommand::SplineThrough { points, .. } => out.extend_from_slice(points),
                PathCommand::Close => {}
            }
        }
        out
    }
}

/// Accumulates path commands for exactly one closed outline.
///
/// `Empty --move_to--> Building --close--> Closed`. Anything else is an
/// [`InvalidStateError`] and leaves the builder unchanged.
#[derive(Debug)]
pub struct ProfileBuilder {
    commands: Vec<PathCommand>,
    state: BuilderState,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            state: BuilderState::Empty,
        }
    }

    /// Creates a builder with room for `capacity` commands.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            state: BuilderState::Empty,
        }
    }

    #[must_use]
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Starts the outline at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] unless the builder is empty.
    pub fn move_to(&mut self, point: Point2) -> Result<&mut Self> {
        self.expect_state("move_to", BuilderState::Empty)?;
        self.commands.push(PathCommand::MoveTo(point));
        self.state = BuilderState::Building;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`InvalidStateError`] unless the outline has been started and not closed.
    pub fn line_to(&mut self, point: Point2) -> Result<&mut Self> {
        self.expect_state("line_to", BuilderState::Building)?;
        self.commands.push(PathCommand::LineTo(point));
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`InvalidStateError`] outside the building state or when
    /// `points` is empty.
    pub fn spline_through(&mut self, points: Vec<Point2>, include_current: bool) -> Result<&mut Self> {
        self.expect_state("spline_through", BuilderState::Building)?;
        if points.is_empty() {
            return Err(InvalidStateError::EmptySpline.into());
        }
        self.commands.push(PathCommand::SplineThrough {
            points,
            include_current,
        });
        Ok(self)
    }

    /// Closes the outline and hands it out.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if nothing was started or the outline
    /// is already closed.
    pub fn close(&mut self) -> Result<Profile> {
        self.expect_state("close", BuilderState::Building)?;
        self.commands.push(PathCommand::Close);
        self.state = BuilderState::Closed;
        Ok(Profile {
            commands: std::mem::take(&mut self.commands),
        })
    }

    fn expect_state(&self, command: &'static str, expected: BuilderState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(InvalidStateError::Command {
                command,
                state: self.state,
            }
            .into())
        }
    }
}
