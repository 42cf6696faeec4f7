use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Tests that run the fittrack binary end to end

#[cfg(test)]
mod cli_tests {
    use super::*;

    /// Run the binary with `home` as the home directory so no user config leaks in
    fn run_fittrack(home: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_fittrack"))
            .args(args)
            .env("HOME", home)
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run fittrack binary")
    }

    fn stdout_lines(output: &Output) -> Vec<String> {
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_no_arguments_prints_sample() {
        let home = tempdir().unwrap();
        let output = run_fittrack(home.path(), &[]);

        assert!(output.status.success());

        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Training type: Swimming; Duration: 1.000 h;"));
        assert!(lines[1].starts_with("Training type: Running; Duration: 1.000 h;"));
        assert!(lines[2].starts_with("Training type: SportsWalking; Duration: 1.000 h;"));
    }

    #[test]
    fn test_unknown_code_exits_after_earlier_lines() {
        let home = tempdir().unwrap();
        let config_path = home.path().join("packages.toml");
        fs::write(
            &config_path,
            r#"
            [[packages]]
            code = "RUN"
            data = [15000, 1, 75]

            [[packages]]
            code = "XYZ"
            data = [1, 1, 1]

            [[packages]]
            code = "WLK"
            data = [9000, 1, 75, 180]
            "#,
        )
        .unwrap();

        let output = run_fittrack(home.path(), &["-c", config_path.to_str().unwrap()]);

        assert!(!output.status.success());

        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Training type: Running; Duration: 1.000 h;"));
        assert!(lines[0].contains("Distance: 9.750 km"));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("'XYZ'"));
        assert_eq!(stderr.matches("XYZ").count(), 1);
    }

    #[test]
    fn test_json_format_flag() {
        let home = tempdir().unwrap();
        let output = run_fittrack(home.path(), &["--format", "json"]);

        assert!(output.status.success());

        let kinds: Vec<String> = stdout_lines(&output)
            .iter()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["training_kind"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(kinds, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let home = tempdir().unwrap();
        let missing = home.path().join("absent.toml");
        let output = run_fittrack(home.path(), &["-c", missing.to_str().unwrap()]);

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read config file"));
    }
}
