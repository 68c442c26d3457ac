//! Grid evaluator.
//!
//! Owns `resolution²` point handles laid out on a lattice over [-1, 1] and
//! rewrites every point's local position on each [`Grid::tick`]. Point `i`
//! always belongs to cell `(x, z) = (i % resolution, i / resolution)`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::Vec3;

use crate::config::{validate_resolution, GraphConfig};
use crate::error::{GraphError, Result};
use crate::functions::morph::{morph, Transition};
use crate::functions::{FunctionLibrary, FunctionName, FunctionSelector, GraphFunction};
use crate::math::{grid_coordinate, grid_step};
use crate::point::{PointFactory, PointHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    /// No points allocated yet, or the resolution changed since.
    Uninitialized,
    /// Points allocated and resting on the lattice, not yet ticked.
    Initialized,
    Ticking,
}

/// What a tick samples: one function, or a blend while a transition runs.
#[derive(Clone, Copy)]
enum Sampler {
    Single(GraphFunction),
    Blend {
        from: GraphFunction,
        to: GraphFunction,
        progress: f32,
    },
}

impl Sampler {
    #[inline]
    fn sample(&self, u: f32, v: f32, t: f32) -> Vec3 {
        match *self {
            Sampler::Single(f) => f(u, v, t),
            Sampler::Blend { from, to, progress } => morph(from, to, progress, u, v, t),
        }
    }
}

fn rejected(err: GraphError) -> GraphError {
    log::warn!("rejected graph configuration: {err}");
    err
}

pub struct Grid<P: PointHandle> {
    library: FunctionLibrary,
    config: GraphConfig,
    active: FunctionSelector,
    transition: Option<Transition>,
    points: Vec<P>,
    state: GridState,
}

impl<P: PointHandle> Grid<P> {
    /// Validate `config` against `library` and build an uninitialized grid.
    pub fn new(library: FunctionLibrary, config: GraphConfig) -> Result<Self> {
        let active = config.validate(&library).map_err(rejected)?;
        Ok(Self {
            library,
            config,
            active,
            transition: None,
            points: Vec::new(),
            state: GridState::Uninitialized,
        })
    }

    /// Allocate `resolution²` points through `factory`.
    ///
    /// Each point gets uniform scale `2 / resolution` and starts at its
    /// lattice cell with zero height. On a factory error every point created
    /// so far is dropped and the grid stays uninitialized.
    pub fn initialize<F>(&mut self, factory: &mut F) -> Result<()>
    where
        F: PointFactory<Point = P>,
    {
        self.points.clear();
        self.state = GridState::Uninitialized;

        let resolution = self.config.resolution;
        let step = grid_step(resolution);
        let mut points = Vec::with_capacity(self.point_count());

        for z in 0..resolution {
            let v = grid_coordinate(z, step);
            for x in 0..resolution {
                let mut point = factory
                    .create()
                    .map_err(|e| GraphError::Factory(Box::new(e)))?;
                point.set_local_scale(step);
                point.set_local_position(Vec3::new(grid_coordinate(x, step), 0.0, v));
                points.push(point);
            }
        }

        self.points = points;
        self.state = GridState::Initialized;
        log::debug!(
            "graph initialized: {}x{} points, function {}",
            resolution,
            resolution,
            self.active_function()
        );
        Ok(())
    }

    /// Move every point to the active function evaluated at `time`.
    ///
    /// `time` is elapsed seconds; the transform receives it multiplied by
    /// the configured time scale. Transitions are timed on unscaled `time`.
    pub fn tick(&mut self, time: f32) -> Result<()> {
        if self.state == GridState::Uninitialized {
            return Err(GraphError::NotInitialized);
        }

        let sampler = self.sampler(time)?;
        let t = time * self.config.time_scale;
        let resolution = self.config.resolution;
        let step = grid_step(resolution);

        #[cfg(feature = "parallel")]
        {
            let res = resolution as usize;
            let positions: Vec<Vec3> = (0..self.points.len())
                .into_par_iter()
                .map(|i| {
                    let u = grid_coordinate((i % res) as u32, step);
                    let v = grid_coordinate((i / res) as u32, step);
                    sampler.sample(u, v, t)
                })
                .collect();
            for (point, position) in self.points.iter_mut().zip(positions) {
                point.set_local_position(position);
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            let mut i = 0;
            for z in 0..resolution {
                let v = grid_coordinate(z, step);
                for x in 0..resolution {
                    let u = grid_coordinate(x, step);
                    self.points[i].set_local_position(sampler.sample(u, v, t));
                    i += 1;
                }
            }
        }

        self.state = GridState::Ticking;
        Ok(())
    }

    /// Resolve the sampler for `time`, finishing a transition that has run out.
    fn sampler(&mut self, time: f32) -> Result<Sampler> {
        if let Some(tr) = self.transition {
            if tr.is_complete(time) {
                self.active = tr.to;
                self.transition = None;
                log::info!("transition to {} complete", self.active_function());
            } else {
                return Ok(Sampler::Blend {
                    from: self.function_for(tr.from)?,
                    to: self.function_for(tr.to)?,
                    progress: tr.progress(time),
                });
            }
        }
        Ok(Sampler::Single(self.function_for(self.active)?))
    }

    fn function_for(&self, selector: FunctionSelector) -> Result<GraphFunction> {
        self.library
            .get(selector)
            .ok_or(GraphError::FunctionOutOfRange {
                index: selector.index(),
                len: self.library.len(),
            })
    }

    /// Switch to function `index` immediately, cancelling any transition.
    /// An out-of-range index leaves the grid untouched.
    pub fn set_function(&mut self, index: usize) -> Result<FunctionSelector> {
        let selector = self.library.select(index).map_err(rejected)?;
        self.switch_to(selector);
        Ok(selector)
    }

    pub fn set_function_by_name(&mut self, name: &str) -> Result<FunctionSelector> {
        let selector = self.library.select_name(name).map_err(rejected)?;
        self.switch_to(selector);
        Ok(selector)
    }

    /// Step to the next function in library order, wrapping around.
    pub fn next_function(&mut self) -> FunctionSelector {
        let selector = self.library.next(self.active);
        self.switch_to(selector);
        selector
    }

    pub fn previous_function(&mut self) -> FunctionSelector {
        let selector = self.library.previous(self.active);
        self.switch_to(selector);
        selector
    }

    fn switch_to(&mut self, selector: FunctionSelector) {
        self.active = selector;
        self.transition = None;
        self.config.function = selector.index();
        log::debug!("graph function set to {}", self.active_function());
    }

    /// Blend from the current function to `index` over the configured
    /// transition duration, starting at elapsed `start_time`.
    ///
    /// A running transition is first snapped to its target. A zero duration
    /// or a target equal to the current function switches immediately.
    pub fn transition_to(&mut self, index: usize, start_time: f32) -> Result<FunctionSelector> {
        let target = self.library.select(index).map_err(rejected)?;
        if let Some(tr) = self.transition.take() {
            self.active = tr.to;
        }
        let duration = self.config.transition_duration;
        if duration <= 0.0 || target == self.active {
            self.switch_to(target);
            return Ok(target);
        }
        self.transition = Some(Transition::new(self.active, target, start_time, duration));
        self.config.function = target.index();
        log::debug!(
            "graph transition {} -> {} over {}s",
            self.active_function(),
            self.library.name_of(target).map_or("?", FunctionName::as_str),
            duration
        );
        Ok(target)
    }

    /// Change the lattice size. A different resolution drops all points and
    /// the grid has to be initialized again.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<()> {
        validate_resolution(resolution).map_err(rejected)?;
        if resolution != self.config.resolution {
            log::info!(
                "graph resolution {} -> {}, points released",
                self.config.resolution,
                resolution
            );
            self.config.resolution = resolution;
            self.points.clear();
            self.state = GridState::Uninitialized;
        }
        Ok(())
    }

    pub fn set_time_scale(&mut self, time_scale: f32) -> Result<()> {
        if !time_scale.is_finite() {
            return Err(rejected(GraphError::InvalidTimeScale(time_scale)));
        }
        self.config.time_scale = time_scale;
        Ok(())
    }

    pub fn set_transition_duration(&mut self, duration: f32) -> Result<()> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(rejected(GraphError::InvalidTransitionDuration(duration)));
        }
        self.config.transition_duration = duration;
        Ok(())
    }

    pub fn library(&self) -> &FunctionLibrary {
        &self.library
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn active_selector(&self) -> FunctionSelector {
        self.active
    }

    /// Name of the function currently driving the grid (the source while a
    /// transition is running).
    pub fn active_function(&self) -> FunctionName {
        // active is always issued by self.library
        self.library.name_of(self.active).unwrap_or(FunctionName::Sine)
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn resolution(&self) -> u32 {
        self.config.resolution
    }

    pub fn step(&self) -> f32 {
        grid_step(self.config.resolution)
    }

    /// Points the grid will hold once initialized.
    pub fn point_count(&self) -> usize {
        let r = self.config.resolution as usize;
        r * r
    }

    /// Points currently allocated.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Snapshot of every point's local position, in point order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(PointHandle::local_position).collect()
    }

    /// Lattice coordinates `(u, v)` of point `index`.
    pub fn coordinates(&self, index: usize) -> Option<(f32, f32)> {
        if index >= self.point_count() {
            return None;
        }
        let res = self.config.resolution as usize;
        let step = self.step();
        Some((
            grid_coordinate((index % res) as u32, step),
            grid_coordinate((index / res) as u32, step),
        ))
    }
}
