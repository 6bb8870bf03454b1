//! Player vs. bullet collision and damage

use super::bullet::Bullet;
use super::rect::Rect;
use super::state::World;

/// Index of the first bullet overlapping `hurtbox`, in collection order
pub fn first_hit(bullets: &[Bullet], hurtbox: &Rect) -> Option<usize> {
    bullets.iter().position(|b| b.intersects(hurtbox))
}

/// Damage the player with the first bullet touching the hurtbox, then let one
/// tick of invincibility elapse. Returns the index of the bullet that hit.
pub fn resolve(world: &mut World) -> Option<usize> {
    let hit = first_hit(&world.bullets, &world.hurtbox());
    if let Some(i) = hit {
        let was_invincible = world.player.invincible_frames > 0;
        world.player.damage(world.bullets[i].attack());
        if !was_invincible {
            log::debug!(
                "Hit for {} (health {})",
                world.bullets[i].attack(),
                world.player.health
            );
        }
    }
    world.player.tick_invincibility();
    hit
}
