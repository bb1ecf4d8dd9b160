// src/main.rs
//
// Offline sanity render: one second of the Trigs module at a few knob
// positions, one past the end stop.

use nd3::{Engine, EngineConfig, NodeRegistry, models, params, register_standard_nodes};

fn main() {
    let config = EngineConfig::default();

    let mut registry = NodeRegistry::new();
    register_standard_nodes(&mut registry);

    for info in registry.iter() {
        let tags: Vec<String> = info.tags.iter().map(|t| t.to_string()).collect();
        println!(
            "{}/{} \"{}\" [{}]: {} param(s), {} input(s), {} output(s)",
            info.plugin,
            info.slug,
            info.name,
            tags.join(", "),
            info.parameters.len(),
            info.inputs.len(),
            info.outputs.len()
        );
    }

    let Some(knob) = registry
        .get(models::TRIGS)
        .and_then(|info| info.find_param(params::PITCH))
        .cloned()
    else {
        println!("Error: no pitch parameter declared");
        return;
    };

    let frames = config.sample_rate as usize;
    let mut out = vec![0.0; frames];

    for travel in [0.0_f32, 0.25, 0.5, 0.75, 1.0, 1.2] {
        let pitch = knob.clamp(knob.denormalize(travel));
        let node = match registry.create(models::TRIGS) {
            Ok(node) => node,
            Err(e) => {
                println!("Error creating module: {}", e);
                return;
            }
        };
        let mut engine = match Engine::new(node, config) {
            Ok(engine) => engine,
            Err(e) => {
                println!("Error preparing engine: {}", e);
                return;
            }
        };

        engine.set_param(params::PITCH, pitch);
        engine.process_block(None, &mut out);

        let rising = out
            .windows(2)
            .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
            .count();
        let peak = out.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()));

        println!(
            "knob {:>3.0}% ({}): {} cycles/s, peak {:.3} V, end phase {:.6}",
            knob.normalize(pitch) * 100.0,
            knob.format(pitch),
            rising,
            peak,
            engine.save_state().map(|s| s.phase).unwrap_or(0.0)
        );
    }
}
