use echobloom_core::grounding::SENSE_STEPS;
use echobloom_core::journal::CATEGORIES;
use echobloom_core::ActivityKind;

use super::CliResult;

pub fn run(json: bool) -> CliResult {
    if json {
        let value = serde_json::json!({
            "activities": ActivityKind::ALL
                .iter()
                .map(|k| serde_json::json!({ "id": k, "title": k.title(), "path": k.path() }))
                .collect::<Vec<_>>(),
            "journal": &CATEGORIES,
            "grounding": &SENSE_STEPS,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Journal categories:");
    for (i, category) in CATEGORIES.iter().enumerate() {
        println!("{}. {} -- {}", i + 1, category.name, category.description);
        for prompt in category.prompts {
            println!("     - {prompt}");
        }
    }
    println!();
    println!("Grounding steps:");
    for step in &SENSE_STEPS {
        println!("  {} x{}: {}", step.sense, step.quota, step.prompt);
    }
    Ok(())
}
