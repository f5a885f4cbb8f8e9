use comfy_table::{Table, presets::UTF8_FULL};
use curbside_optimizer::{
    problem::{collection_problem::CollectionProblem, zone::ZoneIdx},
    solver::assignment::AssignmentPlan,
};

/// Renders the assignment plan as a zone-per-row table, in zone order so
/// repeated runs diff cleanly.
pub fn print_plan(problem: &CollectionProblem, plan: &AssignmentPlan) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Zone", "Day", "Vehicle", "Stops", "Load", "Distance",
    ]);

    for (index, zone) in problem.zones().iter().enumerate() {
        let zone_id = ZoneIdx::new(index);
        let day = zone
            .color()
            .map_or_else(|| String::from("-"), |color| color.to_string());

        match plan.assignment(zone_id) {
            Some(assignment) => {
                let vehicle = problem.vehicle(assignment.vehicle_id);
                table.add_row(vec![
                    String::from(zone.name()),
                    day,
                    String::from(vehicle.external_id()),
                    assignment.stops.len().to_string(),
                    format!("{:.1}/{:.0}", assignment.load, vehicle.capacity()),
                    format!("{:.2}", assignment.distance),
                ]);
            }
            None => {
                table.add_row(vec![
                    String::from(zone.name()),
                    day,
                    String::from("-"),
                    String::from("0"),
                    String::from("-"),
                    String::from("-"),
                ]);
            }
        }
    }

    println!("{table}");
    println!("Total distance: {:.2}", plan.total_distance());
}
