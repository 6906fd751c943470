//! Integration tests for st-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, DISTRESS_FILE, TRACE_FILE};
    use crate::row::{DistressRow, TraceRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trace_row(agent_id: u32, tick: u64) -> TraceRow {
        TraceRow {
            tick,
            agent_id,
            x:          agent_id as f32,
            y:          -1.5,
            vx:         0.25,
            vy:         0.0,
            state:      "SEEK",
            distressed: agent_id == 1,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRACE_FILE).exists());
        assert!(dir.path().join(DISTRESS_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(TRACE_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join(TRACE_FILE)),
            ["tick", "agent_id", "x", "y", "vx", "vy", "state", "distressed"]
        );
        assert_eq!(
            headers(dir.path().join(DISTRESS_FILE)),
            ["tick", "evader", "listener", "distressed"]
        );
    }

    #[test]
    fn csv_trace_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trace(&[trace_row(0, 5), trace_row(1, 5), trace_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5");    // tick
        assert_eq!(&rows[1][1], "1");    // agent_id
        assert_eq!(&rows[1][3], "-1.5"); // y
        assert_eq!(&rows[1][6], "SEEK");
        assert_eq!(&rows[1][7], "1");    // distressed
        assert_eq!(&rows[2][7], "0");
    }

    #[test]
    fn csv_distress_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_distress(&DistressRow { tick: 3, evader: 0, listener: 4, distressed: true }).unwrap();
        w.write_distress(&DistressRow { tick: 9, evader: 0, listener: 4, distressed: false }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DISTRESS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "4");
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[1][0], "9");
        assert_eq!(&rows[1][3], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_trace_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trace(&[]).unwrap();
    }
}

// ── Observer tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use st_agent::{AgentStoreBuilder, Target};
    use st_behavior::{ArriveBands, Behavior, MotionParams};
    use st_core::{AgentId, SimConfig, Vec2};
    use st_motion::KinematicBodies;
    use st_sim::{Sim, SimBuilder};

    use crate::csv::{CsvWriter, DISTRESS_FILE, TRACE_FILE};
    use crate::observer::TraceObserver;
    use crate::row::{DistressRow, TraceRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Keeps everything in memory.
    #[derive(Default)]
    struct MemWriter {
        trace:    Vec<TraceRow>,
        distress: Vec<DistressRow>,
        batches:  usize,
        finishes: usize,
    }

    impl OutputWriter for MemWriter {
        fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
            self.trace.extend_from_slice(rows);
            self.batches += 1;
            Ok(())
        }
        fn write_distress(&mut self, row: &DistressRow) -> OutputResult<()> {
            self.distress.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Fails every write with a numbered error.
    #[derive(Default)]
    struct FailingWriter {
        calls: usize,
    }

    impl FailingWriter {
        fn fail(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other(format!("failure {}", self.calls))))
        }
    }

    impl OutputWriter for FailingWriter {
        fn write_trace(&mut self, _rows: &[TraceRow]) -> OutputResult<()> {
            self.fail()
        }
        fn write_distress(&mut self, _row: &DistressRow) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.fail()
        }
    }

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig { total_ticks, output_interval_ticks, ..SimConfig::default() }
    }

    /// Evader (0) with a threat at distance 3, Cohesion ally (1) subscribed.
    fn evader_and_ally(config: &SimConfig) -> Sim<KinematicBodies> {
        let motion = MotionParams::new(4.0, 0.75).unwrap();
        let bands = ArriveBands::new(1.2, 0.5).unwrap();
        let agents = AgentStoreBuilder::new()
            .agent(Behavior::evade(motion, 5.0).unwrap(), Target::Point(Vec2::new(3.0, 0.0)))
            .agent(Behavior::cohesion(motion, bands), Target::Agent(AgentId(0)))
            .build()
            .unwrap();
        let bodies = KinematicBodies::at(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        SimBuilder::new(config.clone(), agents, bodies)
            .subscribe(AgentId(0), AgentId(1))
            .build()
            .unwrap()
    }

    #[test]
    fn samples_agents_on_output_interval() {
        let config = config(6, 2);
        let mut sim = evader_and_ally(&config);
        let mut obs = TraceObserver::new(MemWriter::default(), &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        // Ticks 0, 2, 4 × 2 agents, one batch per sampled tick.
        assert_eq!(writer.trace.len(), 6);
        assert_eq!(writer.batches, 3);
        let ticks: Vec<u64> = writer.trace.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 0, 2, 2, 4, 4]);
        assert_eq!(writer.finishes, 1);
    }

    #[test]
    fn zero_interval_records_no_agent_rows() {
        let config = config(4, 0);
        let mut sim = evader_and_ally(&config);
        let mut obs = TraceObserver::new(MemWriter::default(), &config);
        sim.run(&mut obs).unwrap();

        let writer = obs.into_writer();
        assert!(writer.trace.is_empty());
        assert_eq!(writer.distress.len(), 1);
    }

    #[test]
    fn distress_recorded_regardless_of_interval() {
        let config = config(4, 3);
        let mut sim = evader_and_ally(&config);
        let mut obs = TraceObserver::new(MemWriter::default(), &config);
        sim.run(&mut obs).unwrap();

        let writer = obs.into_writer();
        assert_eq!(
            writer.distress,
            vec![DistressRow { tick: 0, evader: 0, listener: 1, distressed: true }]
        );
        let ally_at_3 = writer.trace.iter().find(|r| r.tick == 3 && r.agent_id == 1).unwrap();
        assert!(ally_at_3.distressed);
        assert_eq!(ally_at_3.state, "SEEK");
    }

    #[test]
    fn finish_flushes_a_host_driven_loop() {
        let config = config(100, 1);
        let mut sim = evader_and_ally(&config);
        let mut obs = TraceObserver::new(MemWriter::default(), &config);
        for _ in 0..3 {
            sim.step(&mut obs).unwrap();
        }
        sim.finish(&mut obs);
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.finishes, 1);
        assert_eq!(writer.trace.len(), 6);
    }

    #[test]
    fn keeps_first_error_only() {
        let config = config(3, 1);
        let mut sim = evader_and_ally(&config);
        let mut obs = TraceObserver::new(FailingWriter::default(), &config);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("failure 1"), "{err}");
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let config = config(6, 2);
        let mut sim = evader_and_ally(&config);

        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6, "expected 3 ticks × 2 agents = 6 trace rows, got {}", rows.len());
        assert_eq!(&rows[0][6], "EVADE");

        let mut rdr = csv::Reader::from_path(dir.path().join(DISTRESS_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}
