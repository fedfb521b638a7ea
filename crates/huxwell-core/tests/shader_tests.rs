// Runs both WGSL sources through naga, the front end wgpu compiles them
// with, so a shader that would fail pipeline creation fails here instead.

use huxwell_core::*;
use naga::valid::{Capabilities, ValidationFlags, Validator};

fn parse(name: &str, src: &str) -> naga::Module {
    naga::front::wgsl::parse_str(src)
        .unwrap_or_else(|e| panic!("{} does not parse:\n{}", name, e.emit_to_string(src)))
}

fn shaders() -> [(&'static str, &'static str); 2] {
    [("points.wgsl", POINTS_WGSL), ("lines.wgsl", LINES_WGSL)]
}

#[test]
fn both_shaders_validate() {
    for (name, src) in shaders() {
        let module = parse(name, src);
        Validator::new(ValidationFlags::all(), Capabilities::empty())
            .validate(&module)
            .unwrap_or_else(|e| panic!("{} fails validation: {:?}", name, e));
    }
}

#[test]
fn both_shaders_export_the_pipeline_entry_points() {
    for (name, src) in shaders() {
        let module = parse(name, src);
        let has = |entry: &str, stage: naga::ShaderStage| {
            module
                .entry_points
                .iter()
                .any(|ep| ep.name == entry && ep.stage == stage)
        };
        assert!(has("vs_main", naga::ShaderStage::Vertex), "{}", name);
        assert!(has("fs_main", naga::ShaderStage::Fragment), "{}", name);
    }
}

#[test]
fn uniform_blocks_match_the_host_structs() {
    for (name, src) in shaders() {
        let module = parse(name, src);
        let span_of = |type_name: &str| {
            module
                .types
                .iter()
                .find_map(|(_, ty)| match &ty.inner {
                    naga::TypeInner::Struct { span, .. }
                        if ty.name.as_deref() == Some(type_name) =>
                    {
                        Some(*span as usize)
                    }
                    _ => None,
                })
                .unwrap_or_else(|| panic!("{} has no struct {}", name, type_name))
        };
        assert_eq!(span_of("Scene"), std::mem::size_of::<SceneUniforms>(), "{}", name);
        assert_eq!(span_of("Params"), std::mem::size_of::<ShadingParams>(), "{}", name);

        let bindings: Vec<u32> = module
            .global_variables
            .iter()
            .filter(|(_, var)| var.space == naga::AddressSpace::Uniform)
            .filter_map(|(_, var)| var.binding.as_ref())
            .filter(|b| b.group == 0)
            .map(|b| b.binding)
            .collect();
        assert_eq!(bindings, vec![0, 1], "{}", name);
    }
}
