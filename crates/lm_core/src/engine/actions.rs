//! Pure action resolution.
//!
//! Stateless layer between the probability constants and the stateful
//! engine: the engine gathers a `*Context` and draws the `*Rolls` from its
//! RNG, the functions here turn them into results. Keeping the rolls
//! explicit makes every outcome reproducible in tests.

/// Holder drift decision.
#[derive(Debug, Clone)]
pub struct DribbleContext {
    pub in_attacking_half: bool,
    pub step_own_half: i32,
    pub step_attacking_min: i32,
    pub step_attacking_max: i32,
}

#[derive(Debug, Clone)]
pub struct DribbleRolls {
    pub step_roll: f64,
}

/// Cells to drift toward the attacked goal this tick.
pub fn resolve_dribble(ctx: &DribbleContext, rolls: &DribbleRolls) -> i32 {
    if ctx.in_attacking_half {
        let span = (ctx.step_attacking_max - ctx.step_attacking_min + 1) as f64;
        let extra = ((rolls.step_roll * span) as i32).min(span as i32 - 1);
        ctx.step_attacking_min + extra
    } else {
        ctx.step_own_half
    }
}

/// One defender's challenge on the holder.
#[derive(Debug, Clone)]
pub struct TackleContext {
    pub distance: f64,
    pub radius: f64,
    pub tackle_chance: f64,
}

#[derive(Debug, Clone)]
pub struct TackleRolls {
    pub success_roll: f64,
}

#[derive(Debug, Clone)]
pub struct TackleResult {
    pub success: bool,
}

pub fn resolve_tackle(ctx: &TackleContext, rolls: &TackleRolls) -> TackleResult {
    let in_range = ctx.distance <= ctx.radius;
    TackleResult { success: in_range && rolls.success_roll < ctx.tackle_chance }
}

/// A pass already has a receiver; only the steal chance is resolved here.
#[derive(Debug, Clone)]
pub struct PassContext {
    pub interception_chance: f64,
}

#[derive(Debug, Clone)]
pub struct PassRolls {
    pub steal_roll: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Completed,
    Intercepted,
}

pub fn resolve_pass(ctx: &PassContext, rolls: &PassRolls) -> PassOutcome {
    if rolls.steal_roll < ctx.interception_chance {
        PassOutcome::Intercepted
    } else {
        PassOutcome::Completed
    }
}

#[derive(Debug, Clone)]
pub struct ShotContext {
    pub in_attacking_half: bool,
    pub attempt_chance_attacking: f64,
    pub attempt_chance_defensive: f64,
    pub save_chance: f64,
}

#[derive(Debug, Clone)]
pub struct ShotRolls {
    pub attempt_roll: f64,
    pub save_roll: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    NoAttempt,
    Saved,
    Goal,
}

pub fn resolve_shot(ctx: &ShotContext, rolls: &ShotRolls) -> ShotOutcome {
    let attempt_chance = if ctx.in_attacking_half {
        ctx.attempt_chance_attacking
    } else {
        ctx.attempt_chance_defensive
    };
    if rolls.attempt_roll >= attempt_chance {
        return ShotOutcome::NoAttempt;
    }
    if rolls.save_roll < ctx.save_chance {
        ShotOutcome::Saved
    } else {
        ShotOutcome::Goal
    }
}
