//! Feed sensor packages through the factory and render their summaries

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::factory::read_package;
use crate::models::Summary;
use crate::training::Training;

/// One raw sensor package: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

/// How summaries are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-template sentence
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Built-in readings used when no packages are configured
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Compute the summary for a single package
pub fn summarize(package: &Package) -> Result<Summary> {
    let summary = read_package(&package.code, &package.data)?
        .summary()
        .ensure_finite()?;

    tracing::debug!(
        code = %package.code,
        distance_km = summary.distance_km,
        mean_speed_kmh = summary.mean_speed_kmh,
        calories = summary.calories,
        "Package summarized"
    );

    Ok(summary)
}

/// Summarize every package in order, stopping at the first failure
pub fn process_packages(packages: &[Package]) -> Result<Vec<Summary>> {
    let summaries = packages.iter().map(summarize).collect::<Result<Vec<_>>>()?;
    tracing::info!(count = summaries.len(), "Packages processed");
    Ok(summaries)
}

/// Render one summary in the requested format
pub fn render(summary: &Summary, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => serde_json::to_string(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainingError;
    use crate::models::WorkoutKind;

    #[test]
    fn test_sample_order_preserved() {
        let summaries = process_packages(&sample_packages()).unwrap();
        let kinds: Vec<_> = summaries.iter().map(|s| s.training_kind).collect();
        assert_eq!(
            kinds,
            vec![
                WorkoutKind::Swimming,
                WorkoutKind::Running,
                WorkoutKind::SportsWalking
            ]
        );
    }

    #[test]
    fn test_first_error_aborts() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XYZ", vec![1.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];
        let err = process_packages(&packages).unwrap_err();
        assert_eq!(
            err,
            TrainingError::UnrecognizedWorkoutCode {
                code: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn test_overflowing_calories_rejected() {
        let err = summarize(&Package::new("RUN", vec![15000.0, 1.0, 1e307])).unwrap_err();
        assert_eq!(
            err,
            TrainingError::NonFiniteResult {
                kind: WorkoutKind::Running,
                metric: "calories",
                value: f64::INFINITY,
            }
        );
    }

    #[test]
    fn test_tiny_duration_overflowing_speed_rejected() {
        let err = summarize(&Package::new("RUN", vec![15000.0, 1e-320, 75.0])).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::NonFiniteResult {
                metric: "mean_speed_kmh",
                ..
            }
        ));
    }

    #[test]
    fn test_render_formats() {
        let summary = summarize(&Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0])).unwrap();

        assert_eq!(
            render(&summary, OutputFormat::Text).unwrap(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );

        let json: serde_json::Value =
            serde_json::from_str(&render(&summary, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["training_kind"], "Swimming");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
