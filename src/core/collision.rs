//! Failure detection: the avatar hits a barrier or leaves the screen.

use super::avatar::Avatar;
use super::obstacles::Obstacle;

/// True if the avatar overlaps any barrier, is above the top of the screen,
/// or has sunk below `screen_height - avatar.height`. Pure; no tolerance.
pub fn check_collision(avatar: &Avatar, obstacles: &[Obstacle], screen_height: f64) -> bool {
    let body = avatar.rect();
    let hit_barrier = obstacles
        .iter()
        .any(|o| body.intersects(&o.top()) || body.intersects(&o.bottom()));

    hit_barrier || avatar.y < 0.0 || avatar.y > screen_height - avatar.height
}
