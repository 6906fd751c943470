//! chase: a hunter closes on an evader whose allies come to help.
//!
//! Agent 0 seeks agent 1.  Agent 1 evades agent 0 and raises distress when
//! the hunter closes within its evade radius; the Cohesion allies subscribed
//! to it rally while it is in danger and settle once it escapes.  A lone Idle
//! drifter shows velocity decay.
//!
//! Set `RUST_LOG=debug` to see every distress signal.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use st_agent::{AgentStoreBuilder, Target};
use st_behavior::{ArriveBands, Behavior, DEFAULT_EVADE_RADIUS, MotionParams};
use st_core::{AgentId, SimClock, SimConfig, SimRng, Tick, Vec2};
use st_motion::KinematicBodies;
use st_output::{CsvWriter, OutputWriter, TraceObserver};
use st_sim::{AgentReport, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const ALLY_COUNT:            usize = 4;
const SEED:                  u64   = 42;
const FIXED_DT:              f32   = 0.02;  // 50 Hz
const SIM_SECS:              f32   = 20.0;
const OUTPUT_INTERVAL_TICKS: u64   = 5;     // 10 trace rows per agent per second
const OUTPUT_DIR:            &str  = "output/chase";

// ── Observer wrapper to count state changes ──────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         TraceObserver<W>,
    labels:        Vec<&'static str>,
    state_changes: usize,
    distress:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: TraceObserver<W>, agent_count: usize) -> Self {
        Self { inner, labels: vec!["IDLE"; agent_count], state_changes: 0, distress: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_distress(&mut self, tick: Tick, evader: AgentId, listener: AgentId, distressed: bool) {
        self.distress += 1;
        self.inner.on_distress(tick, evader, listener, distressed);
    }

    fn on_agent(&mut self, tick: Tick, agent: AgentId, report: &AgentReport) {
        let label = &mut self.labels[agent.index()];
        if *label != report.label() {
            *label = report.label();
            self.state_changes += 1;
        }
        self.inner.on_agent(tick, agent, report);
    }

    fn on_tick_end(&mut self, tick: Tick, steered: usize) {
        self.inner.on_tick_end(tick, steered);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rng = SimRng::new(SEED);

    // 1. Behaviors.
    let bands = ArriveBands::new(1.2, 0.5)?;
    let hunter = Behavior::seek(MotionParams::new(4.0, 0.75)?, bands);
    let evader = Behavior::evade(MotionParams::new(3.0, 0.9)?, DEFAULT_EVADE_RADIUS)?;
    let ally = Behavior::cohesion(MotionParams::new(3.5, 0.75)?, bands);
    let drifter = Behavior::idle(MotionParams::new(2.0, 0.95)?);

    // 2. Agents.  Ids follow insertion order.
    let hunter_id = AgentId(0);
    let evader_id = AgentId(1);
    let agents = AgentStoreBuilder::with_capacity(ALLY_COUNT + 3)
        .agent(hunter, Target::Agent(evader_id))
        .agent(evader, Target::Agent(hunter_id))
        .agents(ALLY_COUNT, ally, Target::Agent(evader_id))
        .agent(drifter, Target::Point(Vec2::ZERO))
        .build()?;
    let agent_count = agents.count;
    let drifter_id = AgentId(agent_count as u32 - 1);

    // 3. Bodies: hunter far left, evader at the origin, allies scattered
    //    around the evader, drifter launched in a random direction.
    let mut bodies = KinematicBodies::new(agent_count);
    bodies.place(hunter_id, Vec2::new(-15.0, 0.0))?;
    for i in 0..ALLY_COUNT {
        let id = AgentId(2 + i as u32);
        bodies.place(id, rng.point_near(Vec2::ZERO, 12.0))?;
    }
    bodies.place(drifter_id, rng.point_near(Vec2::new(10.0, 10.0), 2.0))?;
    bodies.launch(drifter_id, rng.unit_direction() * 2.0)?;

    // 4. Sim config.
    let config = SimConfig {
        fixed_dt:              FIXED_DT,
        total_ticks:           SimClock::new(FIXED_DT).ticks_for_secs(SIM_SECS),
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    info!(
        agents = agent_count,
        ticks = config.total_ticks,
        fixed_dt = config.fixed_dt,
        "scenario ready",
    );

    // 5. Build sim: every ally listens to the evader.
    let allies = (0..ALLY_COUNT).map(|i| (evader_id, AgentId(2 + i as u32)));
    let mut sim = SimBuilder::new(config.clone(), agents, bodies)
        .subscriptions(allies)
        .build()?;

    // 6. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer, &config), agent_count);

    // 7. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 8. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  state changes     : {}", obs.state_changes);
    println!("  distress delivered: {}", obs.distress);
    println!("  output            : {OUTPUT_DIR}/");
    println!();

    println!("{:<6} {:<10} {:<8} {:<11} {:>8}", "Agent", "Mode", "State", "Distressed", "Speed");
    println!("{}", "-".repeat(47));
    for agent in sim.agents.agent_ids() {
        let Some(report) = sim.report(agent) else { continue };
        println!(
            "{:<6} {:<10} {:<8} {:<11} {:>8.3}",
            agent.0,
            sim.agents.mode(agent).as_str(),
            report.label(),
            if report.distressed { "yes" } else { "no" },
            report.velocity.length(),
        );
    }

    Ok(())
}
