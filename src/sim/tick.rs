//! The frame loop
//!
//! One `Simulation` owns the entity list, the single long-lived cursor, and
//! the seeded RNG; nothing else ever touches the list. Each frame walks a
//! snapshot of the population, recycles what expired, and paces itself to
//! the frame budget.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::physics::{self, Bounds};
use crate::consts::{GRAVITY, POPULATION_MAX, POPULATION_MIN, TARGET_FRAME_MS};
use crate::error::{Error, Result};
use crate::list::{Cursor, List};
use crate::mesh::MeshTemplate;
use crate::platform::{Event, EventSource, RenderTarget};

/// Loop state. `ShuttingDown` is terminal and reached only on a quit signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    Running,
    ShuttingDown,
}

/// What one frame did, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Entities pulled from the cursor this frame
    pub visited: usize,
    /// Entities destroyed and replaced this frame
    pub recycled: usize,
}

/// Owns and orchestrates the live entity population.
pub struct Simulation {
    entities: List<Entity>,
    cursor: Cursor,
    rng: Pcg32,
    templates: &'static [&'static MeshTemplate],
    next_id: u32,
    phase: SimPhase,
    last_frame: FrameReport,
}

impl Simulation {
    /// Spawn the initial population (10 to 19 entities, seeded) appended in
    /// id order.
    pub fn new(seed: u64, templates: &'static [&'static MeshTemplate]) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::NoTemplates);
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut entities = List::new();
        let mut next_id = 0;

        let population = rng.random_range(POPULATION_MIN..=POPULATION_MAX);
        for _ in 0..population {
            let idx = rng.random_range(0..templates.len());
            entities.push_back(Entity::new(next_id, templates[idx], &mut rng)?);
            next_id += 1;
        }
        log::info!("spawned {population} entities (seed {seed})");

        let cursor = entities.cursor();
        Ok(Self {
            entities,
            cursor,
            rng,
            templates,
            next_id,
            phase: SimPhase::Running,
            last_frame: FrameReport::default(),
        })
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn entities(&self) -> &List<Entity> {
        &self.entities
    }

    /// Direct population access, for tests and tooling. Structural changes
    /// made through this are picked up at the next frame's cursor re-sync.
    pub fn entities_mut(&mut self) -> &mut List<Entity> {
        &mut self.entities
    }

    pub fn last_frame(&self) -> FrameReport {
        self.last_frame
    }

    /// Advance one frame: update, recycle, render, present.
    ///
    /// `elapsed_ms` is the wall time since the previous frame started. The
    /// pass visits exactly the number of entities alive when the frame
    /// began; replacements appended during recycling are first visited next
    /// frame. Input is not handled here; the driver drains it after the
    /// frame-budget sleep via [`Simulation::pump_events`].
    pub fn frame(
        &mut self,
        elapsed_ms: f32,
        target: &mut impl RenderTarget,
    ) -> Result<FrameReport> {
        if self.phase == SimPhase::ShuttingDown {
            return Ok(FrameReport::default());
        }

        target.clear();
        let bounds = Bounds {
            width: target.width(),
            height: target.height(),
        };

        if !self.cursor.is_valid_for(&self.entities) {
            // The population changed between frames; start over at the head.
            self.cursor.reset(&self.entities);
        }

        // Snapshot the population before the pass.
        let count = self.entities.len();
        let mut expired = Vec::new();
        let mut visited = 0;
        for _ in 0..count {
            let Some(entity) = self.cursor.next_mut(&mut self.entities)? else {
                break;
            };
            visited += 1;
            if entity.expired() {
                expired.push(entity.id());
                continue;
            }
            physics::update(entity, GRAVITY, elapsed_ms, &bounds);
            entity.render(target);
        }

        // Recycle outside the active traversal; replacements go to the tail
        // in expiry order.
        let recycled = expired.len();
        for id in expired {
            if self.entities.remove_where(|e| e.id() == id).is_some() {
                log::debug!("entity {id} expired, recycling");
            }
            let replacement = self.spawn_entity()?;
            self.entities.push_back(replacement);
        }

        // Rebind the cursor for the next frame.
        self.cursor.reset(&self.entities);

        target.present();
        self.last_frame = FrameReport { visited, recycled };
        Ok(self.last_frame)
    }

    /// Drain pending input and react to it. Returns the phase afterwards.
    pub fn pump_events(
        &mut self,
        target: &mut impl RenderTarget,
        events: &mut impl EventSource,
    ) -> SimPhase {
        while let Some(event) = events.poll() {
            match event {
                Event::Quit => {
                    self.shutdown();
                    return self.phase;
                }
                Event::WindowShown => target.reposition(50, 50),
            }
        }
        self.phase
    }

    fn spawn_entity(&mut self) -> Result<Entity> {
        // Explicit seeded template selection
        let template = self.templates[self.rng.random_range(0..self.templates.len())];
        let id = self.next_id;
        self.next_id += 1;
        let entity = Entity::new(id, template, &mut self.rng)?;
        log::debug!("spawned entity {id} from '{}'", template.name);
        Ok(entity)
    }

    /// Destroy every remaining entity and enter the terminal phase.
    fn shutdown(&mut self) {
        let remaining = self.entities.len();
        self.entities.clear();
        self.cursor.reset(&self.entities);
        self.phase = SimPhase::ShuttingDown;
        log::info!("quit: destroyed {remaining} entities");
    }
}

/// Real-time driver: render, sleep off whatever is left of the frame
/// budget, then handle input, until shutdown.
pub fn run(
    sim: &mut Simulation,
    target: &mut impl RenderTarget,
    events: &mut impl EventSource,
) -> Result<()> {
    use std::time::{Duration, Instant};

    // The first frame has no predecessor to measure; assume one on-budget
    // frame.
    let mut elapsed_ms = TARGET_FRAME_MS;
    while sim.phase() == SimPhase::Running {
        let frame_start = Instant::now();
        sim.frame(elapsed_ms, target)?;

        let render_ms = frame_start.elapsed().as_secs_f32() * 1000.0;
        let wait_ms = (TARGET_FRAME_MS - render_ms).max(0.0);
        std::thread::sleep(Duration::from_secs_f32(wait_ms / 1000.0));

        sim.pump_events(target, events);
        elapsed_ms = frame_start.elapsed().as_secs_f32() * 1000.0;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;
    use crate::platform::{HeadlessTarget, ScriptedEvents};

    // Single-triangle template so triangles drawn == entities rendered.
    static DOT: MeshTemplate = MeshTemplate {
        name: "dot",
        triangles: &[Triangle::from_vertices(-100, 0, 100, 0, 0, 50)],
    };
    static DOT_SET: [&MeshTemplate; 1] = [&DOT];

    fn sim(seed: u64) -> Simulation {
        Simulation::new(seed, &DOT_SET).unwrap()
    }

    fn target() -> HeadlessTarget {
        HeadlessTarget::new(1500.0, 800.0)
    }

    #[test]
    fn initial_population_is_in_range() {
        for seed in 0..20 {
            let sim = sim(seed);
            let n = sim.entities().len();
            assert!((10..=19).contains(&n), "seed {seed} spawned {n}");
        }
    }

    #[test]
    fn empty_template_set_is_rejected() {
        static NONE: [&MeshTemplate; 0] = [];
        assert!(matches!(Simulation::new(1, &NONE), Err(Error::NoTemplates)));
    }

    #[test]
    fn frame_renders_every_live_entity() {
        let mut sim = sim(42);
        let mut target = target();

        let population = sim.entities().len();
        let report = sim.frame(16.0, &mut target).unwrap();

        assert_eq!(sim.phase(), SimPhase::Running);
        assert_eq!(target.frame_triangles, population as u64);
        assert_eq!(target.clears, 1);
        assert_eq!(target.presents, 1);
        assert_eq!(
            report,
            FrameReport {
                visited: population,
                recycled: 0
            }
        );
    }

    #[test]
    fn expired_entities_are_recycled_at_constant_population() {
        let mut sim = sim(42);
        let population = sim.entities().len();

        // Expire the first three entities.
        let doomed: Vec<u32> = sim.entities().iter().take(3).map(|e| e.id()).collect();
        for entity in sim.entities_mut().iter_mut().take(3) {
            entity.ttl_ms = 0;
        }

        let mut target = target();
        sim.frame(16.0, &mut target).unwrap();

        // Expired entities were visited but not updated or rendered.
        assert_eq!(sim.last_frame().visited, population);
        assert_eq!(sim.last_frame().recycled, 3);
        assert_eq!(target.frame_triangles, (population - 3) as u64);

        // Population is back to full strength, old ids gone, replacements
        // appended at the tail.
        assert_eq!(sim.entities().len(), population);
        for id in &doomed {
            assert!(sim.entities().iter().all(|e| e.id() != *id));
        }
        let tail_ids: Vec<u32> = sim
            .entities()
            .iter()
            .skip(population - 3)
            .map(|e| e.id())
            .collect();
        assert_eq!(tail_ids.len(), 3);
        assert!(tail_ids.iter().all(|id| doomed.iter().all(|d| id > d)));

        // Replacements are visited and rendered on the following frame.
        sim.frame(16.0, &mut target).unwrap();
        assert_eq!(target.frame_triangles, population as u64);
        assert_eq!(sim.last_frame().recycled, 0);
    }

    #[test]
    fn quit_unwinds_every_entity() {
        let mut sim = sim(7);
        let mut target = target();
        let mut events = ScriptedEvents::with_events([Event::Quit]);

        sim.frame(16.0, &mut target).unwrap();
        let phase = sim.pump_events(&mut target, &mut events);
        assert_eq!(phase, SimPhase::ShuttingDown);
        assert!(sim.entities().is_empty());

        // Terminal: further frames are no-ops.
        sim.frame(16.0, &mut target).unwrap();
        assert_eq!(sim.phase(), SimPhase::ShuttingDown);
        assert_eq!(target.clears, 1);
    }

    #[test]
    fn frame_leaves_pending_input_untouched() {
        let mut sim = sim(7);
        let mut target = target();
        let mut events = ScriptedEvents::with_events([Event::Quit]);

        // The rendering pass never reads input; a queued quit takes effect
        // only at the post-sleep drain.
        sim.frame(16.0, &mut target).unwrap();
        assert_eq!(sim.phase(), SimPhase::Running);
        assert!(!sim.entities().is_empty());

        assert_eq!(
            sim.pump_events(&mut target, &mut events),
            SimPhase::ShuttingDown
        );
    }

    #[test]
    fn window_shown_requests_reposition() {
        let mut sim = sim(7);
        let mut target = target();
        let mut events = ScriptedEvents::with_events([Event::WindowShown]);

        sim.frame(16.0, &mut target).unwrap();
        sim.pump_events(&mut target, &mut events);
        assert_eq!(target.position, Some((50, 50)));
        assert_eq!(sim.phase(), SimPhase::Running);
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = sim(99);
        let mut b = sim(99);
        let mut target_a = target();
        let mut target_b = target();

        for _ in 0..10 {
            a.frame(16.0, &mut target_a).unwrap();
            b.frame(16.0, &mut target_b).unwrap();
        }

        assert_eq!(a.entities().len(), b.entities().len());
        for (ea, eb) in a.entities().iter().zip(b.entities().iter()) {
            assert_eq!(ea.id(), eb.id());
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.vel, eb.vel);
            assert_eq!(ea.ttl_ms, eb.ttl_ms);
        }
        assert_eq!(target_a.total_triangles, target_b.total_triangles);
    }

    #[test]
    fn population_changes_between_frames_are_tolerated() {
        let mut sim = sim(3);
        let mut target = target();

        sim.frame(16.0, &mut target).unwrap();

        // A structural change outside the frame loop stales the cursor; the
        // next frame re-syncs instead of erroring.
        let first = sim.entities().iter().next().map(|e| e.id()).unwrap();
        sim.entities_mut().remove_where(|e| e.id() == first);
        let len = sim.entities().len();

        sim.frame(16.0, &mut target).unwrap();
        assert_eq!(sim.last_frame().visited, len);
    }
}
