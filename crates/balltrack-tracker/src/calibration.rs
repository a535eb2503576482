//! Interactive pan/tilt scale calibration.
//!
//! A line-oriented prompt: the operator nudges the scale factors while
//! watching the camera, then saves. Reads any `BufRead` and writes any
//! `Write`, so the session runs the same against a terminal or a script.

use std::io::{BufRead, Write};
use std::str::FromStr;

use balltrack_models::CameraConfig;

use crate::config::RunMode;
use crate::error::{TrackerError, TrackerResult};
use crate::logging::TrackingLogger;
use crate::store::ConfigStore;

/// Multiplier applied by `pan+` / `tilt+`.
pub const SCALE_UP: f64 = 1.1;

/// Multiplier applied by `pan-` / `tilt-`.
pub const SCALE_DOWN: f64 = 0.9;

const BANNER: &str = "=== Calibration Mode ===
Commands:
  pan+ / pan- : Adjust pan scale
  tilt+ / tilt- : Adjust tilt scale
  save : Save calibration
  exit : Exit calibration mode";

/// One operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationCommand {
    PanUp,
    PanDown,
    TiltUp,
    TiltDown,
    Save,
    Exit,
}

impl FromStr for CalibrationCommand {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pan+" => Ok(Self::PanUp),
            "pan-" => Ok(Self::PanDown),
            "tilt+" => Ok(Self::TiltUp),
            "tilt-" => Ok(Self::TiltDown),
            "save" => Ok(Self::Save),
            "exit" => Ok(Self::Exit),
            other => Err(TrackerError::calibration(format!("Unknown command: {other}"))),
        }
    }
}

/// Return `config` with one scale factor multiplied, if the result stays valid.
///
/// Non-scale commands return the config unchanged.
pub fn apply_scale(config: &CameraConfig, command: CalibrationCommand) -> TrackerResult<CameraConfig> {
    let mut adjusted = *config;
    match command {
        CalibrationCommand::PanUp => adjusted.pan_scale *= SCALE_UP,
        CalibrationCommand::PanDown => adjusted.pan_scale *= SCALE_DOWN,
        CalibrationCommand::TiltUp => adjusted.tilt_scale *= SCALE_UP,
        CalibrationCommand::TiltDown => adjusted.tilt_scale *= SCALE_DOWN,
        CalibrationCommand::Save | CalibrationCommand::Exit => return Ok(adjusted),
    }

    adjusted.validate()?;
    Ok(adjusted)
}

/// An interactive calibration session over one camera config.
pub struct CalibrationSession {
    config: CameraConfig,
    store: ConfigStore,
    logger: TrackingLogger,
}

impl CalibrationSession {
    /// Create a new session starting from `config`.
    pub fn new(config: CameraConfig, store: ConfigStore) -> Self {
        Self {
            config,
            store,
            logger: TrackingLogger::new("camera", RunMode::Calibrate.as_str()),
        }
    }

    /// Builder: set the session logger.
    pub fn with_logger(mut self, logger: TrackingLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Get the current (possibly unsaved) config.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Run the prompt until `exit` or end of input.
    ///
    /// Only I/O errors on `input`/`output` end the session early; bad
    /// commands, rejected adjustments and failed saves are reported to the
    /// operator and the prompt continues.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> TrackerResult<()> {
        let _span = self.logger.create_span().entered();
        writeln!(output, "{BANNER}")?;
        self.logger.log_start(&format!(
            "Calibrating against {}",
            self.store.path().display()
        ));

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match line.parse::<CalibrationCommand>() {
                Ok(CalibrationCommand::Exit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(e) => {
                    self.logger.log_warning(&e.to_string());
                    writeln!(output, "Unknown command")?;
                }
            }

            writeln!(
                output,
                "Current scales - Pan: {:.2}, Tilt: {:.2}",
                self.config.pan_scale, self.config.tilt_scale
            )?;
        }

        self.logger.log_stop(&format!(
            "pan_scale={:.4} tilt_scale={:.4}",
            self.config.pan_scale, self.config.tilt_scale
        ));
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: CalibrationCommand, output: &mut W) -> TrackerResult<()> {
        if command == CalibrationCommand::Save {
            match self.store.save(&self.config) {
                Ok(()) => writeln!(output, "Calibration saved")?,
                Err(e) => {
                    self.logger
                        .log_error(&format!("Failed to save calibration: {}", e));
                    writeln!(output, "Failed to save calibration: {e}")?;
                }
            }
            return Ok(());
        }

        match apply_scale(&self.config, command) {
            Ok(adjusted) => self.config = adjusted,
            Err(e) => {
                self.logger
                    .log_warning(&format!("Rejected scale adjustment: {}", e));
                writeln!(output, "Rejected: {e}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session_in(dir: &tempfile::TempDir) -> CalibrationSession {
        let store = ConfigStore::new(dir.path().join("camera_config.json"));
        CalibrationSession::new(CameraConfig::default(), store)
    }

    fn run_script(session: &mut CalibrationSession, script: &str) -> String {
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("pan+".parse::<CalibrationCommand>().unwrap(), CalibrationCommand::PanUp);
        assert_eq!(" TILT- \n".parse::<CalibrationCommand>().unwrap(), CalibrationCommand::TiltDown);
        assert_eq!("Save".parse::<CalibrationCommand>().unwrap(), CalibrationCommand::Save);
        assert!("pan++".parse::<CalibrationCommand>().is_err());
        assert!("".parse::<CalibrationCommand>().is_err());
    }

    #[test]
    fn test_session_logs_in_calibration_mode() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);
        assert!(format!("{:?}", session.logger).contains("calibration"));

        let addr: std::net::SocketAddr = "127.0.0.1:8000".parse().unwrap();
        let session = session_in(&dir)
            .with_logger(TrackingLogger::new(addr, RunMode::Calibrate.as_str()));
        assert!(format!("{:?}", session.logger).contains("127.0.0.1:8000"));
    }

    #[test]
    fn test_pan_up_then_down_compounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        run_script(&mut session, "pan+\npan-\nexit\n");

        let pan = session.config().pan_scale;
        assert!((pan - 1.1 * 0.9).abs() < 1e-12);
        assert!((pan - 0.99).abs() < 1e-12);
        assert!((pan - 1.0).abs() > 1e-3);
        assert!((session.config().tilt_scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tilt_commands() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        run_script(&mut session, "tilt+\ntilt+\nexit\n");
        assert!((session.config().tilt_scale - 1.21).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_command_reports_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let output = run_script(&mut session, "zoom+\npan+\nexit\n");

        assert!(output.contains("Unknown command"));
        assert!(output.contains("Current scales - Pan: 1.00, Tilt: 1.00"));
        assert!(output.contains("Current scales - Pan: 1.10, Tilt: 1.00"));
        assert!((session.config().pan_scale - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_save_persists_current_scales() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let output = run_script(&mut session, "pan-\nsave\nexit\n");
        assert!(output.contains("Calibration saved"));

        let reloaded = ConfigStore::new(dir.path().join("camera_config.json")).load().unwrap();
        assert!((reloaded.pan_scale - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let output = run_script(&mut session, "pan+\n");
        assert!(output.starts_with("=== Calibration Mode ==="));
        assert!((session.config().pan_scale - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_exit_prints_no_scales() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let output = run_script(&mut session, "exit\n");
        assert!(!output.contains("Current scales"));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let config = CameraConfig::default().with_scales(0.0, 1.0);
        let result = apply_scale(&config, CalibrationCommand::PanUp);

        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_scale_overflow_rejected() {
        let config = CameraConfig::default().with_scales(1.0, f64::MAX);
        assert!(apply_scale(&config, CalibrationCommand::TiltUp).is_err());
        assert!(apply_scale(&config, CalibrationCommand::TiltDown).is_ok());
    }
}
