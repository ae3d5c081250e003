use tracing::trace;

use super::COMBAT_RADIUS;
use super::ant::AntKey;
use super::colony::Colony;

/// A pair of ants that met and killed each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub attacker: AntKey,
    pub defender: AntKey,
}

/// Resolves contact between two rival colonies.
///
/// Every ant of `a` looks for the first ant of `b` closer than
/// [`COMBAT_RADIUS`]; both are parked at the sentinel. Parked ants are never
/// matched again, and each attacker takes at most one opponent with it.
/// Contact is symmetric, so one pass led by `a` also covers every fight `b`
/// would have started. Both colonies are swept before returning.
pub fn resolve(a: &mut Colony, b: &mut Colony) -> Vec<Engagement> {
    let radius_sq = COMBAT_RADIUS * COMBAT_RADIUS;
    let attackers: Vec<AntKey> = a.ants().keys().collect();
    let mut engagements = Vec::new();

    for attacker in attackers {
        let Some(pos) = a
            .ant(attacker)
            .filter(|ant| !ant.is_eliminated())
            .map(|ant| ant.pos)
        else {
            continue;
        };
        let defender = b
            .ants()
            .iter()
            .find(|(_, enemy)| {
                !enemy.is_eliminated() && enemy.pos.distance_squared(pos) < radius_sq
            })
            .map(|(key, _)| key);
        let Some(defender) = defender else {
            continue;
        };

        a.eliminate(attacker);
        b.eliminate(defender);
        trace!(
            attacker_colony = a.colony_id,
            defender_colony = b.colony_id,
            x = pos.x,
            y = pos.y,
            "ants killed each other"
        );
        engagements.push(Engagement { attacker, defender });
    }

    a.remove_eliminated();
    b.remove_eliminated();
    engagements
}
