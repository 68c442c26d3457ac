use bytemuck::Zeroable;
use graph_core::{FunctionLibrary, GraphConfig, GraphError, Grid, Marker, MarkerFactory};
use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::prelude::*;

/// GPU-compatible point struct: 16 bytes, matches the WGSL/GLSL instance layout
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuPoint {
    position: [f32; 3], // 12 bytes
    scale: f32,         //  4 bytes
}

impl From<&Marker> for GpuPoint {
    fn from(marker: &Marker) -> Self {
        GpuPoint {
            position: marker.position.to_array(),
            scale: marker.scale,
        }
    }
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg: JsValue = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::log_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging() {
    // set_logger only succeeds once per module instance
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn to_js(err: GraphError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct GraphWorld {
    grid: Grid<Marker>,
    gpu_buffer: Vec<GpuPoint>,
}

#[wasm_bindgen]
impl GraphWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: u32, function: u32) -> Result<GraphWorld, JsValue> {
        init_logging();

        let config = GraphConfig::default()
            .with_resolution(resolution)
            .with_function(function as usize);
        let mut grid = Grid::new(FunctionLibrary::standard(), config).map_err(to_js)?;
        grid.initialize(&mut MarkerFactory).map_err(to_js)?;

        log::info!(
            "GraphWorld created: {} points, function {}",
            grid.len(),
            grid.active_function()
        );

        let mut world = GraphWorld {
            grid,
            gpu_buffer: Vec::new(),
        };
        world.write_gpu_output();
        Ok(world)
    }

    /// Advance to elapsed `time` seconds. Returns milliseconds spent.
    #[wasm_bindgen]
    pub fn tick(&mut self, time: f32) -> Result<f32, JsValue> {
        let start = js_sys::Date::now();
        self.grid.tick(time).map_err(to_js)?;
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        Ok(elapsed as f32)
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<GpuPoint, f32>(&self.gpu_buffer).as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuPoint>()
    }

    #[wasm_bindgen]
    pub fn point_count(&self) -> usize {
        self.grid.len()
    }

    #[wasm_bindgen]
    pub fn resolution(&self) -> u32 {
        self.grid.resolution()
    }

    #[wasm_bindgen]
    pub fn function_count(&self) -> usize {
        self.grid.library().len()
    }

    #[wasm_bindgen]
    pub fn function_name(&self) -> String {
        self.grid.active_function().to_string()
    }

    /// Name of function `index`, or `undefined` when out of range.
    #[wasm_bindgen]
    pub fn function_name_at(&self, index: u32) -> Option<String> {
        let library = self.grid.library();
        let selector = library.select(index as usize).ok()?;
        library.name_of(selector).map(|name| name.to_string())
    }

    #[wasm_bindgen]
    pub fn set_function(&mut self, index: u32) -> Result<(), JsValue> {
        self.grid.set_function(index as usize).map_err(to_js)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_function_by_name(&mut self, name: &str) -> Result<(), JsValue> {
        self.grid.set_function_by_name(name).map_err(to_js)?;
        Ok(())
    }

    /// Cycle to the next function. Returns its index.
    #[wasm_bindgen]
    pub fn next_function(&mut self) -> u32 {
        self.grid.next_function().index() as u32
    }

    #[wasm_bindgen]
    pub fn previous_function(&mut self) -> u32 {
        self.grid.previous_function().index() as u32
    }

    #[wasm_bindgen]
    pub fn transition_to(&mut self, index: u32, time: f32) -> Result<(), JsValue> {
        self.grid.transition_to(index as usize, time).map_err(to_js)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_transition_duration(&mut self, seconds: f32) -> Result<(), JsValue> {
        self.grid.set_transition_duration(seconds).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_time_scale(&mut self, time_scale: f32) -> Result<(), JsValue> {
        self.grid.set_time_scale(time_scale).map_err(to_js)
    }

    /// Change the lattice size and rebuild the points. The GPU buffer is
    /// reallocated, so the JS side must re-read its pointer and length.
    #[wasm_bindgen]
    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), JsValue> {
        self.grid.set_resolution(resolution).map_err(to_js)?;
        if self.grid.is_empty() {
            self.grid.initialize(&mut MarkerFactory).map_err(to_js)?;
            self.write_gpu_output();
        }
        Ok(())
    }
}

impl GraphWorld {
    fn write_gpu_output(&mut self) {
        let points = self.grid.points();
        if self.gpu_buffer.len() != points.len() {
            self.gpu_buffer = vec![GpuPoint::zeroed(); points.len()];
        }
        for (slot, marker) in self.gpu_buffer.iter_mut().zip(points) {
            *slot = GpuPoint::from(marker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_point_layout() {
        assert_eq!(std::mem::size_of::<GpuPoint>(), 16);
        let marker = Marker {
            position: glam::Vec3::new(1.0, 2.0, 3.0),
            scale: 0.2,
        };
        let gpu = GpuPoint::from(&marker);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&gpu));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.2]);
    }
}
