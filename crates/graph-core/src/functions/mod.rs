//! Function library.
//!
//! Seven height-field waves ([`wave`]) and four parametric surfaces
//! ([`surface`]), addressed by [`FunctionName`] and collected into an ordered
//! [`FunctionLibrary`] that the grid indexes through a validated
//! [`FunctionSelector`].

pub mod morph;
pub mod surface;
pub mod wave;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::{GraphError, Result};

/// A transform from grid coordinates and time to a position.
pub type GraphFunction = fn(f32, f32, f32) -> Vec3;

/// The built-in transforms, in library order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionName {
    Sine,
    Sine2D,
    CrossSine2D,
    MultiSine,
    MultiSine2D,
    Weird,
    Ripple,
    Cylinder,
    WobblyCylinder,
    TwistingStar,
    Sphere,
}

impl FunctionName {
    pub const ALL: [FunctionName; 11] = [
        FunctionName::Sine,
        FunctionName::Sine2D,
        FunctionName::CrossSine2D,
        FunctionName::MultiSine,
        FunctionName::MultiSine2D,
        FunctionName::Weird,
        FunctionName::Ripple,
        FunctionName::Cylinder,
        FunctionName::WobblyCylinder,
        FunctionName::TwistingStar,
        FunctionName::Sphere,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionName::Sine => "Sine",
            FunctionName::Sine2D => "Sine2D",
            FunctionName::CrossSine2D => "CrossSine2D",
            FunctionName::MultiSine => "MultiSine",
            FunctionName::MultiSine2D => "MultiSine2D",
            FunctionName::Weird => "Weird",
            FunctionName::Ripple => "Ripple",
            FunctionName::Cylinder => "Cylinder",
            FunctionName::WobblyCylinder => "WobblyCylinder",
            FunctionName::TwistingStar => "TwistingStar",
            FunctionName::Sphere => "Sphere",
        }
    }

    /// Position in [`FunctionName::ALL`], which is also the index in the
    /// standard library.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The transform this name refers to.
    pub fn function(self) -> GraphFunction {
        match self {
            FunctionName::Sine => wave::sine,
            FunctionName::Sine2D => wave::sine_2d,
            FunctionName::CrossSine2D => wave::cross_sine_2d,
            FunctionName::MultiSine => wave::multi_sine,
            FunctionName::MultiSine2D => wave::multi_sine_2d,
            FunctionName::Weird => wave::weird,
            FunctionName::Ripple => wave::ripple,
            FunctionName::Cylinder => surface::cylinder,
            FunctionName::WobblyCylinder => surface::wobbly_cylinder,
            FunctionName::TwistingStar => surface::twisting_star,
            FunctionName::Sphere => surface::sphere,
        }
    }

    /// True for transforms that treat their inputs as `(u, v)` surface
    /// parameters instead of passing `(x, z)` through.
    pub fn is_surface(self) -> bool {
        matches!(
            self,
            FunctionName::Cylinder
                | FunctionName::WobblyCylinder
                | FunctionName::TwistingStar
                | FunctionName::Sphere
        )
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionName {
    type Err = GraphError;

    /// Case-insensitive; `"sine2d"` and `"Sine2D"` both parse.
    fn from_str(s: &str) -> Result<Self> {
        FunctionName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::UnknownFunction(s.to_string()))
    }
}

/// Index of a function inside the [`FunctionLibrary`] that issued it.
///
/// Selectors only come out of [`FunctionLibrary::select`] and friends, so a
/// selector held by a grid is always in range for that grid's library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FunctionSelector(usize);

impl FunctionSelector {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable table of named transforms.
#[derive(Clone, Debug)]
pub struct FunctionLibrary {
    entries: Vec<(FunctionName, GraphFunction)>,
}

impl FunctionLibrary {
    /// All eleven built-in functions in [`FunctionName::ALL`] order.
    pub fn standard() -> Self {
        Self::from_names(&FunctionName::ALL)
    }

    /// A library holding just `names`, in the given order.
    pub fn from_names(names: &[FunctionName]) -> Self {
        Self {
            entries: names.iter().map(|&name| (name, name.function())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate `index` against this library.
    pub fn select(&self, index: usize) -> Result<FunctionSelector> {
        if index < self.entries.len() {
            Ok(FunctionSelector(index))
        } else {
            Err(GraphError::FunctionOutOfRange { index, len: self.entries.len() })
        }
    }

    /// Look a function up by name (case-insensitive).
    pub fn select_name(&self, name: &str) -> Result<FunctionSelector> {
        let wanted: FunctionName = name.parse()?;
        self.entries
            .iter()
            .position(|(n, _)| *n == wanted)
            .map(FunctionSelector)
            .ok_or_else(|| GraphError::UnknownFunction(name.to_string()))
    }

    pub fn get(&self, selector: FunctionSelector) -> Option<GraphFunction> {
        self.entries.get(selector.0).map(|(_, f)| *f)
    }

    pub fn name_of(&self, selector: FunctionSelector) -> Option<FunctionName> {
        self.entries.get(selector.0).map(|(n, _)| *n)
    }

    /// The selector after `selector`, wrapping to the first entry.
    pub fn next(&self, selector: FunctionSelector) -> FunctionSelector {
        FunctionSelector((selector.0 + 1) % self.entries.len().max(1))
    }

    /// The selector before `selector`, wrapping to the last entry.
    pub fn previous(&self, selector: FunctionSelector) -> FunctionSelector {
        let len = self.entries.len().max(1);
        FunctionSelector((selector.0 + len - 1) % len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FunctionSelector, FunctionName)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (FunctionSelector(i), *name))
    }
}

impl Default for FunctionLibrary {
    fn default() -> Self {
        Self::standard()
    }
}
