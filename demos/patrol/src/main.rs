//! patrol - guards walking patrol routes in every movement mode.
//!
//! Three routes are generated from a seeded RNG and a fourth ("lobby") is
//! loaded from an embedded waypoint CSV with a wait point, a speed override,
//! and a timed pause.  Two guards per movement mode walk the generated
//! routes; one more walks the lobby route with per-point overrides enabled.
//! Guards that stop at a wait point are released by a dispatcher every
//! `DISPATCH_INTERVAL_TICKS`.
//!
//! Run with `RUST_LOG=debug` to see every waypoint advance.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use wp_core::{EntityId, SimConfig, SimRng, Tick};
use wp_entity::{EntityConfig, MovementMode, Transform, TraversalStatus};
use wp_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wp_path::{load_path_reader, Path as Route};
use wp_sim::{EntityEvent, SimBuilder, SimEntity, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                    u64 = 7;
const DT_SECS:                 f32 = 1.0 / 30.0;
const TOTAL_TICKS:             u64 = 30 * 120; // two simulated minutes
const OUTPUT_INTERVAL_TICKS:   u64 = 15;       // two snapshots per second
const DISPATCH_INTERVAL_TICKS: u64 = 90;       // wait points hold guards ~3 s
const ROUTE_COUNT:             u64 = 3;
const GUARDS_PER_MODE:         usize = 2;
const SITE_HALF_EXTENT:        f32 = 30.0;
const OUTPUT_DIR:              &str = "output/patrol";

// ── Lobby route CSV ───────────────────────────────────────────────────────────

// Square loop around the lobby; the guard waits for dispatch at the desk,
// hurries down the corridor, and pauses two seconds at the window.
const LOBBY_CSV: &str = "\
x,y,z,wait_at,speed_override,segment_time_override,pause_secs\n\
0,0,0,false,,,\n\
8,0,0,true,,,\n\
8,0,8,false,3.0,,\n\
0,0,8,false,,,2.0\n\
0,0,1,false,,,\n\
";

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    event_rows:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, event_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_event(&mut self, tick: Tick, event: &EntityEvent) {
        self.event_rows += 1;
        self.inner.on_event(tick, event);
    }

    fn on_snapshot(&mut self, tick: Tick, entities: &[SimEntity]) {
        self.snapshot_rows += entities.len();
        self.inner.on_snapshot(tick, entities);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Guard setup ───────────────────────────────────────────────────────────────

fn guard_config(mode: MovementMode, rng: &mut SimRng) -> EntityConfig {
    EntityConfig {
        move_speed:             match mode {
            // Fraction of the remaining distance per second.
            MovementMode::PointDrivenStraight => rng.gen_range(0.8..1.5),
            _                                 => rng.gen_range(2.0..4.0),
        },
        turn_speed:             rng.gen_range(2.5..4.0),
        close_enough:           0.4,
        roughly_facing:         0.85,
        speed_easing_distance:  if rng.gen_bool(0.5) { 1.0 } else { 0.0 },
        progressive_turn_speed: rng.gen_bool(0.5),
        snap_to_start:          true,
        mode,
        honor_point_overrides:  false,
    }
}

fn random_route(rng: &mut SimRng) -> Route {
    let n = rng.gen_range(4..8usize);
    Route::from_positions((0..n).map(|_| rng.ground_point(SITE_HALF_EXTENT, 0.0)))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== patrol - waypath path traversal ===");
    println!(
        "Modes: {}  |  Guards/mode: {GUARDS_PER_MODE}  |  Seed: {SEED}",
        MovementMode::ALL.len()
    );
    println!();

    let config = SimConfig {
        dt_secs:               DT_SECS,
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    let mut rng = SimRng::new(config.seed);
    let mut builder = SimBuilder::new(config.clone());

    // 1. Routes: generated patrol loops plus the lobby CSV.
    let routes: Vec<_> = (0..ROUTE_COUNT)
        .map(|i| builder.path(random_route(&mut rng.child(i))))
        .collect();
    let lobby = load_path_reader(Cursor::new(LOBBY_CSV))?;
    println!(
        "Routes: {} generated + lobby ({} points, ends at {:?})",
        routes.len(),
        lobby.len(),
        lobby.destination()
    );
    let lobby = builder.path(lobby);

    // 2. Guards: GUARDS_PER_MODE per movement mode, round-robin over routes.
    let mut roster: Vec<(EntityId, MovementMode)> = Vec::new();
    let guard_count = MovementMode::ALL.len() * GUARDS_PER_MODE;
    for (i, mode) in MovementMode::ALL.into_iter().cycle().take(guard_count).enumerate() {
        let guard = guard_config(mode, &mut rng);
        let route = routes[i % routes.len()];
        roster.push((builder.entity(guard, Transform::default(), Some(route)), mode));
    }
    let lobby_guard = EntityConfig {
        move_speed:            1.5,
        turn_speed:            3.0,
        close_enough:          0.3,
        snap_to_start:         true,
        honor_point_overrides: true,
        ..EntityConfig::default()
    }
    .with_mode(MovementMode::ForwardDrivenSmooth);
    let lobby_mode = lobby_guard.mode;
    roster.push((builder.entity(lobby_guard, Transform::default(), Some(lobby)), lobby_mode));

    let mut sim = builder.build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 4. Run in dispatch windows, releasing anyone held at a wait point.
    let t0 = Instant::now();
    while sim.clock.current_tick < config.end_tick() {
        let remaining = config.end_tick().0 - sim.clock.current_tick.0;
        sim.run_ticks(remaining.min(DISPATCH_INTERVAL_TICKS), &mut obs)?;

        for &(id, _) in &roster {
            let held = sim.entity(id)?.status() == TraversalStatus::Paused
                && sim.entity(id)?.follower.state().pause_remaining.is_none();
            if held && sim.resume(id)? {
                log::info!("dispatcher released {id} at {}", sim.clock.current_tick);
            }
        }
        if sim.all_completed() {
            break;
        }
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation finished at {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  entity_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  path_events.csv      : {} rows", obs.event_rows);
    println!();

    println!("{:<12} {:<18} {:<11} {:<9} {}", "Guard", "Mode", "Status", "Waypoint", "Position");
    println!("{}", "-".repeat(72));
    for &(id, mode) in &roster {
        let guard = sim.entity(id)?;
        let p = guard.pose.position;
        println!(
            "{:<12} {:<18} {:<11} {:<9} ({:>6.2}, {:>6.2}, {:>6.2})",
            id.to_string(),
            mode.to_string(),
            guard.status().to_string(),
            guard.follower.index(),
            p.x,
            p.y,
            p.z,
        );
    }

    Ok(())
}
