use approx::assert_abs_diff_eq;
use foundation_model::builder::{COMBINATION_NAME, LOAD_CASE_NAME};
use foundation_model::prelude::*;

const TOL: f64 = 1e-9;

fn distance(a: &Node, b: &Node) -> f64 {
    let [ax, ay, az] = a.coords();
    let [bx, by, bz] = b.coords();
    ((bx - ax).powi(2) + (by - ay).powi(2) + (bz - az).powi(2)).sqrt()
}

fn params(width_x: f64, width_y: f64, pile_length: f64, uniform_load: f64) -> FoundationParams {
    let mut params = FoundationParams::default();
    params.geometry.slab.width_x = width_x;
    params.geometry.slab.width_y = width_y;
    params.geometry.piles.length = pile_length;
    params.loads.input.uniform_load = uniform_load;
    params
}

/// A spread of slab sizes (mm) that all leave room for the clearance
fn sample_inputs() -> Vec<FoundationParams> {
    let mut out = Vec::new();
    for &wx in &[1000.0, 2500.0, 6000.0, 12750.0] {
        for &wy in &[800.0, 5000.0, 9000.0] {
            for &length in &[3.0, 7.0, 21.5] {
                out.push(params(wx, wy, length, 1.0));
            }
        }
    }
    out
}

#[test]
fn corner_nodes_match_reference_example() {
    let model = build_foundation_model(&params(6000.0, 5000.0, 7.0, 1.0)).unwrap();
    let slab = &model.planes()[0];
    let corners: Vec<[f64; 3]> = model
        .plane_corners(slab)
        .unwrap()
        .iter()
        .map(|n| n.coords())
        .collect();

    assert_eq!(
        corners,
        vec![
            [0.0, 0.0, 0.0],
            [0.0, 5.0, 0.0],
            [6.0, 5.0, 0.0],
            [6.0, 0.0, 0.0],
        ]
    );
    let names: Vec<&str> = model.nodes()[..4].iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["n1", "n2", "n3", "n4"]);
}

#[test]
fn slab_is_a_closed_rectangle_at_ground_level() {
    for p in sample_inputs() {
        let model = build_foundation_model(&p).unwrap();
        let slab = &model.planes()[0];
        let [a, b, c, d] = model.plane_corners(slab).unwrap();

        for n in [a, b, c, d] {
            assert_eq!(n.z, 0.0);
        }
        assert_abs_diff_eq!(distance(a, b), p.slab_width_y(), epsilon = TOL);
        assert_abs_diff_eq!(distance(b, c), p.slab_width_x(), epsilon = TOL);
        assert_abs_diff_eq!(distance(c, d), p.slab_width_y(), epsilon = TOL);
        assert_abs_diff_eq!(distance(d, a), p.slab_width_x(), epsilon = TOL);
        assert_abs_diff_eq!(slab.thickness, p.slab_thickness(), epsilon = TOL);
        assert_eq!(slab.material.name, "concrete_slab");
    }
}

#[test]
fn twelve_piles_keep_edge_clearance() {
    for p in sample_inputs() {
        let model = build_foundation_model(&p).unwrap();
        assert_eq!(model.beams().len(), 12);

        let (wx, wy) = (p.slab_width_x(), p.slab_width_y());
        for beam in model.beams() {
            let (top, _) = model.beam_nodes(beam).unwrap();
            for distance in [top.x, wx - top.x, top.y, wy - top.y] {
                assert!(distance >= 0.3 - TOL, "pile at ({}, {}) too close to edge", top.x, top.y);
            }
        }
    }
}

#[test]
fn pile_tops_at_zero_and_bottoms_at_minus_length() {
    for p in sample_inputs() {
        let model = build_foundation_model(&p).unwrap();
        for beam in model.beams() {
            let (top, bottom) = model.beam_nodes(beam).unwrap();
            assert_eq!(top.z, 0.0);
            assert_eq!(bottom.z, -p.pile_length());
            assert_eq!((top.x, top.y), (bottom.x, bottom.y));
            assert!(top.name.ends_with("_t"));
            assert!(bottom.name.ends_with("_b"));
        }
    }
}

#[test]
fn pile_nodes_are_numbered_x_major() {
    let model = build_foundation_model(&FoundationParams::default()).unwrap();
    let tops: Vec<(f64, f64)> = model
        .beams()
        .iter()
        .map(|b| {
            let (top, _) = model.beam_nodes(b).unwrap();
            (top.x, top.y)
        })
        .collect();

    assert_eq!(tops, pile_positions(6.0, 5.0, &LayoutConfig::default()));
    assert_eq!(model.nodes()[4].name, "K:p1_t");
    assert_eq!(model.nodes()[5].name, "K:p1_b");
    assert_eq!(model.nodes()[27].name, "K:p12_b");
}

#[test]
fn pile_cross_section_uses_concrete_and_user_diameter() {
    let mut p = FoundationParams::default();
    p.geometry.piles.diameter = 650.0;
    let model = build_foundation_model(&p).unwrap();

    assert_eq!(model.cross_sections().len(), 1);
    let section = &model.cross_sections()[0];
    assert_eq!(section.name, "concrete_pile");
    assert_eq!(section.material.name, "C30/37");
    assert_abs_diff_eq!(section.diameter(), 0.65, epsilon = TOL);
}

#[test]
fn supports_follow_the_fixed_stiffness_rules() {
    let model = build_foundation_model(&FoundationParams::default()).unwrap();

    assert_eq!(model.point_supports().len(), 12);
    for support in model.point_supports() {
        let node = model.node(support.node).unwrap();
        assert!(node.name.ends_with("_b"), "toe support on {}", node.name);
        let r = support.restraints;
        assert_eq!(r.z, Freedom::Flexible(400e6));
        for f in [r.x, r.y, r.rx, r.ry, r.rz] {
            assert_eq!(f, Freedom::Free);
        }
    }

    let (beam_supports, edge_supports): (Vec<_>, Vec<_>) = model
        .line_supports()
        .iter()
        .partition(|s| matches!(s.target, LineSupportTarget::Beam(_)));

    assert_eq!(beam_supports.len(), 12);
    for support in beam_supports {
        let r = support.restraints;
        assert_eq!(r.x, Freedom::Flexible(10e6));
        assert_eq!(r.y, Freedom::Flexible(10e6));
        for f in [r.z, r.rx, r.ry, r.rz] {
            assert_eq!(f, Freedom::Free);
        }
    }

    assert_eq!(edge_supports.len(), 4);
    for support in edge_supports {
        let LineSupportTarget::PlaneEdge { edge, .. } = support.target else {
            unreachable!()
        };
        let r = support.restraints;
        match edge {
            1 | 3 => {
                assert_eq!(r.x, Freedom::Flexible(50e6));
                assert_eq!(r.y, Freedom::Free);
            }
            2 | 4 => {
                assert_eq!(r.x, Freedom::Free);
                assert_eq!(r.y, Freedom::Flexible(50e6));
            }
            other => panic!("unexpected edge {other}"),
        }
        for f in [r.z, r.rx, r.ry, r.rz] {
            assert_eq!(f, Freedom::Free);
        }
    }
}

#[test]
fn one_load_set_weighting_the_case_by_one() {
    let model = build_foundation_model(&FoundationParams::default()).unwrap();

    assert_eq!(model.load_groups().len(), 1);
    assert_eq!(model.load_cases().len(), 1);
    assert_eq!(model.load_combinations().len(), 1);

    let case = &model.load_cases()[0];
    assert_eq!(case.name, LOAD_CASE_NAME);
    let combo = &model.load_combinations()[0];
    assert_eq!(combo.name, COMBINATION_NAME);
    assert_eq!(combo.factors.len(), 1);
    assert_eq!(combo.factors[0].1, 1.0);
}

#[test]
fn surface_force_scales_linearly_and_points_down() {
    let base = build_foundation_model(&params(6000.0, 5000.0, 7.0, 1.0)).unwrap();
    let base_force = base.surface_loads()[0].value;
    assert_eq!(base_force, -1000.0);

    for &factor in &[0.5, 2.0, 3.25, 10.0] {
        let model = build_foundation_model(&params(6000.0, 5000.0, 7.0, factor)).unwrap();
        let load = &model.surface_loads()[0];
        assert!(load.value < 0.0);
        assert_abs_diff_eq!(load.value, base_force * factor, epsilon = TOL);
    }
}

#[test]
fn visualization_order_is_nodes_beams_slab_and_repeatable() {
    let p = FoundationParams::default();
    let model = build_foundation_model(&p).unwrap();
    let first = visualization_geometries(&p, &model).unwrap();

    assert_eq!(first.len(), 28 + 12 + 1);
    assert!(first[..28].iter().all(|g| matches!(g, Geometry::Sphere { .. })));
    assert!(first[28..40]
        .iter()
        .all(|g| matches!(g, Geometry::CircularExtrusion { .. })));
    assert!(matches!(first[40], Geometry::Extrusion { .. }));

    let again = visualization_geometries(&p, &build_foundation_model(&p).unwrap()).unwrap();
    assert_eq!(first, again);

    if let Geometry::Sphere { radius, .. } = &first[0] {
        assert_abs_diff_eq!(*radius, 0.05, epsilon = TOL);
    }
    if let Geometry::CircularExtrusion { diameter, line, .. } = &first[28] {
        assert_abs_diff_eq!(*diameter, 0.5, epsilon = TOL);
        assert_eq!(line.start.z, 0.0);
        assert_eq!(line.end.z, -7.0);
    }
}

#[test]
fn definition_file_does_not_depend_on_the_model() {
    let def = write_definition_file().unwrap();
    // Building models in between must not change it
    build_foundation_model(&params(9000.0, 4000.0, 12.0, 5.0)).unwrap();
    assert_eq!(def, write_definition_file().unwrap());
}
