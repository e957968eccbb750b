//! Semester command handler

use super::apply;
use crate::args::SemesterSubcommand;
use cgpa_calc::core::record::Mutation;
use cgpa_calc::core::store::RecordStore;
use cgpa_calc::core::tracker::Tracker;

/// Dispatch semester subcommands
///
/// # Errors
/// Returns a message if the semester does not exist or the record cannot be saved.
pub fn run<S: RecordStore>(
    subcommand: SemesterSubcommand,
    tracker: &mut Tracker<S>,
) -> Result<(), String> {
    match subcommand {
        SemesterSubcommand::Add { name } => {
            let record = apply(tracker, Mutation::AddSemester { name })?;
            if let Some(semester) = record.semesters.last() {
                println!("✓ Added {} (id {})", semester.name, semester.id);
            }
        }
        SemesterSubcommand::Remove { id } => {
            let record = apply(tracker, Mutation::RemoveSemester { semester_id: id.clone() })?;
            println!("✓ Removed semester {id} (CGPA now {:.2})", record.cgpa);
        }
        SemesterSubcommand::Rename { id, name } => {
            apply(
                tracker,
                Mutation::RenameSemester {
                    semester_id: id.clone(),
                    name: name.clone(),
                },
            )?;
            println!("✓ Renamed semester {id} to {name}");
        }
        SemesterSubcommand::Clear { id } => {
            let record = apply(tracker, Mutation::ClearCourses { semester_id: id.clone() })?;
            println!("✓ Cleared semester {id} (CGPA now {:.2})", record.cgpa);
        }
    }
    Ok(())
}
