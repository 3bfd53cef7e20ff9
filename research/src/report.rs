use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use psolib::{OptimizationReport, Trajectory};

// Writes one row per particle per iteration, for an external plotting tool:
// - iteration
// - particle
// - x0 .. x{n-1}
// The final global best follows as a single row with iteration "best".
pub fn save_trajectory(
    trajectory: &Trajectory,
    report: &OptimizationReport,
    output: &str,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output)?;
    write_trajectory(trajectory, report, file)
}

pub fn write_trajectory<W: Write>(
    trajectory: &Trajectory,
    report: &OptimizationReport,
    output: W,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(output);

    // Write the headers to the top of the file
    let mut headers = vec!["iteration".to_string(), "particle".to_string()];
    headers.extend((0..report.best_position.len()).map(|i| format!("x{}", i)));
    writer.write_record(&headers)?;

    for (iteration, frame) in trajectory.frames().iter().enumerate() {
        for (particle, position) in frame.iter().enumerate() {
            let mut record = vec![iteration.to_string(), particle.to_string()];
            record.extend(position.iter().map(|x| x.to_string()));
            writer.write_record(&record)?;
        }
    }

    let mut best = vec!["best".to_string(), String::new()];
    best.extend(report.best_position.iter().map(|x| x.to_string()));
    writer.write_record(&best)?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_trajectory() {
        let mut trajectory = Trajectory::new();
        trajectory.push(vec![vec![0.0, 0.25], vec![1.0, 0.5]]);
        trajectory.push(vec![vec![0.5, 0.5], vec![0.75, 0.5]]);
        let report = OptimizationReport {
            best_position: vec![0.5, 0.5],
            best_fitness: 0.0,
            iterations: 2,
            trajectory: None,
        };

        let mut buffer = Vec::new();
        write_trajectory(&trajectory, &report, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(
            csv,
            "iteration,particle,x0,x1\n\
             0,0,0,0.25\n\
             0,1,1,0.5\n\
             1,0,0.5,0.5\n\
             1,1,0.75,0.5\n\
             best,,0.5,0.5\n"
        );
    }
}
