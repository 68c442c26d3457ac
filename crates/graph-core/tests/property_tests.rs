use graph_core::functions::surface::{cylinder, sphere};
use graph_core::math::{grid_coordinate, grid_step};
use graph_core::FunctionName;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_transforms_are_pure(
        a in -1.0f32..1.0,
        b in -1.0f32..1.0,
        t in 0.0f32..1000.0,
        idx in 0usize..11,
    ) {
        let f = FunctionName::ALL[idx].function();
        let first = f(a, b, t);
        let second = f(a, b, t);
        prop_assert_eq!(first, second);
        prop_assert!(first.is_finite());
    }

    #[test]
    fn prop_cylinder_unit_radius(u in -10.0f32..10.0, v in -1.0f32..1.0, t in 0.0f32..100.0) {
        let p = cylinder(u, v, t);
        prop_assert!((p.x * p.x + p.z * p.z - 1.0).abs() < 1e-4, "radius^2 = {}", p.x * p.x + p.z * p.z);
        prop_assert_eq!(p.y, v);
    }

    #[test]
    fn prop_sphere_unit_length(u in -1.0f32..1.0, v in -1.0f32..1.0, t in 0.0f32..100.0) {
        let p = sphere(u, v, t);
        prop_assert!((p.length() - 1.0).abs() < 1e-4, "length = {}", p.length());
    }

    #[test]
    fn prop_height_fields_pass_through(x in -1.0f32..1.0, z in -1.0f32..1.0, t in 0.0f32..100.0) {
        for name in FunctionName::ALL.into_iter().filter(|n| !n.is_surface()) {
            let p = name.function()(x, z, t);
            prop_assert_eq!(p.x, x);
            prop_assert_eq!(p.z, z);
        }
    }

    #[test]
    fn prop_grid_coordinates_inside_cell(resolution in 10u32..=100, frac in 0.0f64..1.0) {
        let index = ((resolution as f64 * frac) as u32).min(resolution - 1);
        let step = grid_step(resolution);
        let c = grid_coordinate(index, step);
        let cell_min = index as f32 * step - 1.0;
        prop_assert!(c > cell_min && c < cell_min + step + 1e-6);
        prop_assert!(c > -1.0 && c < 1.0);
    }
}
