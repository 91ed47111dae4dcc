use std::time::Duration;

/// One-shot mount animation from an offset, transparent (and optionally scaled)
/// pose to the natural one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_y: i32,
    pub from_opacity: f64,
    pub from_scale: f64,
    pub duration: Duration,
    pub delay: Duration,
}

impl Default for Entrance {
    fn default() -> Self {
        Self::fade_up(50)
    }
}

impl Entrance {
    pub const DURATION: Duration = Duration::from_millis(600);

    pub fn fade_up(offset_y: i32) -> Self {
        Self {
            offset_y,
            from_opacity: 0.0,
            from_scale: 1.0,
            duration: Self::DURATION,
            delay: Duration::ZERO,
        }
    }

    pub fn fade_in() -> Self {
        Self::fade_up(0)
    }

    pub fn scale_in(from_scale: f64, duration: Duration) -> Self {
        Self {
            offset_y: 0,
            from_opacity: 0.0,
            from_scale,
            duration,
            delay: Duration::ZERO,
        }
    }

    /// Slides in from `offset_y` without fading.
    pub fn slide(offset_y: i32) -> Self {
        Self {
            offset_y,
            from_opacity: 1.0,
            from_scale: 1.0,
            duration: Self::DURATION,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatPhase {
    /// Not mounted yet (server render, first paint)
    #[default]
    Hidden,
    Entering,
    Settled,
}

impl FloatPhase {
    pub fn at(since_mount: Option<Duration>, entrance: &Entrance) -> Self {
        match since_mount {
            None => FloatPhase::Hidden,
            Some(elapsed) if elapsed < entrance.total() => FloatPhase::Entering,
            Some(_) => FloatPhase::Settled,
        }
    }
}

/// `(duration, delay)` of a single CSS transition
pub type Timing = (Duration, Duration);

/// Resolved visual pose plus the transitions used to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStyle {
    pub opacity: f64,
    pub translate_y: i32,
    pub scale: f64,
    pub opacity_transition: Option<Timing>,
    pub transform_transition: Option<Timing>,
}

impl MotionStyle {
    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y, self.scale
        );
        let transitions = [
            ("opacity", self.opacity_transition),
            ("transform", self.transform_transition),
        ]
        .into_iter()
        .filter_map(|(prop, timing)| {
            timing.map(|(duration, delay)| {
                format!(
                    "{prop} {}ms ease-out {}ms",
                    duration.as_millis(),
                    delay.as_millis()
                )
            })
        })
        .collect::<Vec<_>>();
        if !transitions.is_empty() {
            css.push_str(&format!(" transition: {};", transitions.join(", ")));
        }
        css
    }
}

impl Entrance {
    pub fn style(&self, phase: FloatPhase) -> MotionStyle {
        match phase {
            FloatPhase::Hidden => MotionStyle {
                opacity: self.from_opacity,
                translate_y: self.offset_y,
                scale: self.from_scale,
                opacity_transition: None,
                transform_transition: None,
            },
            FloatPhase::Entering | FloatPhase::Settled => MotionStyle {
                opacity: 1.0,
                translate_y: 0,
                scale: 1.0,
                opacity_transition: Some((self.duration, self.delay)),
                transform_transition: Some((self.duration, self.delay)),
            },
        }
    }
}

/// Entrance plus a small lift while the pointer hovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub entrance: Entrance,
    pub hover_lift: i32,
    pub hover_duration: Duration,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            entrance: Entrance::default(),
            hover_lift: -5,
            hover_duration: Duration::from_millis(200),
        }
    }
}

impl FloatMotion {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            entrance: Entrance::default().with_delay(delay),
            ..Default::default()
        }
    }

    /// Hovering moves the transform onto the fast hover timing right away, even
    /// mid-entrance; opacity keeps the entrance timing until it has settled.
    pub fn style(&self, phase: FloatPhase, hovered: bool) -> MotionStyle {
        let mut style = self.entrance.style(phase);
        if phase == FloatPhase::Hidden {
            return style;
        }
        let hover_timing = Some((self.hover_duration, Duration::ZERO));
        if hovered {
            style.translate_y = self.hover_lift;
            style.transform_transition = hover_timing;
        }
        if phase == FloatPhase::Settled {
            style.opacity_transition = hover_timing;
            style.transform_transition = hover_timing;
        }
        style
    }
}

/// Pairs each item with its start delay, `index * step`, preserving order.
pub fn stagger<I>(items: I, step: Duration) -> impl Iterator<Item = (Duration, I::Item)>
where
    I: IntoIterator,
{
    items
        .into_iter()
        .enumerate()
        .map(move |(i, item)| (step * i as u32, item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILLS};

    #[test]
    fn test_phase_progression() {
        let entrance = Entrance::default().with_delay(Duration::from_millis(200));
        assert_eq!(FloatPhase::at(None, &entrance), FloatPhase::Hidden);
        assert_eq!(
            FloatPhase::at(Some(Duration::ZERO), &entrance),
            FloatPhase::Entering
        );
        assert_eq!(
            FloatPhase::at(Some(Duration::from_millis(799)), &entrance),
            FloatPhase::Entering
        );
        assert_eq!(
            FloatPhase::at(Some(Duration::from_millis(800)), &entrance),
            FloatPhase::Settled
        );
    }

    #[test]
    fn test_hidden_pose() {
        let style = FloatMotion::default().style(FloatPhase::Hidden, true);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y, 50);
        assert_eq!(style.opacity_transition, None);
        assert_eq!(style.transform_transition, None);
    }

    #[test]
    fn test_entering_uses_entrance_timing() {
        let float = FloatMotion::with_delay(Duration::from_millis(300));
        let style = float.style(FloatPhase::Entering, false);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y, 0);
        let entrance_timing = Some((Duration::from_millis(600), Duration::from_millis(300)));
        assert_eq!(style.opacity_transition, entrance_timing);
        assert_eq!(style.transform_transition, entrance_timing);
    }

    #[test]
    fn test_hover_while_entering_lifts_fast() {
        // last skill card, still inside its stagger delay
        let float = FloatMotion::with_delay(Duration::from_millis(1100));
        let style = float.style(FloatPhase::Entering, true);
        assert_eq!(style.translate_y, -5);
        assert_eq!(
            style.transform_transition,
            Some((Duration::from_millis(200), Duration::ZERO))
        );
        // fade-in still runs on the entrance schedule
        assert_eq!(
            style.opacity_transition,
            Some((Duration::from_millis(600), Duration::from_millis(1100)))
        );
        assert_eq!(
            style.css(),
            "opacity: 1; transform: translateY(-5px) scale(1); transition: opacity 600ms ease-out 1100ms, transform 200ms ease-out 0ms;"
        );
    }

    #[test]
    fn test_hover_lift_and_revert() {
        let float = FloatMotion::default();
        let hovered = float.style(FloatPhase::Settled, true);
        assert_eq!(hovered.translate_y, -5);
        assert_eq!(
            hovered.transform_transition,
            Some((Duration::from_millis(200), Duration::ZERO))
        );
        let released = float.style(FloatPhase::Settled, false);
        assert_eq!(released.translate_y, 0);
        assert_eq!(released.opacity, 1.0);
    }

    #[test]
    fn test_style_is_pure() {
        let float = FloatMotion::with_delay(Duration::from_millis(100));
        for phase in [FloatPhase::Hidden, FloatPhase::Entering, FloatPhase::Settled] {
            for hovered in [false, true] {
                assert_eq!(float.style(phase, hovered), float.style(phase, hovered));
            }
        }
    }

    #[test]
    fn test_scale_in_css() {
        let entrance = Entrance::scale_in(0.5, Duration::from_millis(800));
        assert_eq!(
            entrance.style(FloatPhase::Hidden).css(),
            "opacity: 0; transform: translateY(0px) scale(0.5);"
        );
        assert_eq!(
            entrance.style(FloatPhase::Entering).css(),
            "opacity: 1; transform: translateY(0px) scale(1); transition: opacity 800ms ease-out 0ms, transform 800ms ease-out 0ms;"
        );
    }

    #[test]
    fn test_slide_keeps_opacity() {
        let style = Entrance::slide(-100).style(FloatPhase::Hidden);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y, -100);
    }

    #[test]
    fn test_stagger_offsets() {
        let step = Duration::from_millis(100);
        let delays = stagger(0..5, step).map(|(d, _)| d).collect::<Vec<_>>();
        let first = delays[0];
        for (n, delay) in delays.iter().enumerate() {
            assert_eq!(*delay - first, step * n as u32);
        }
        assert_eq!(delays[4], Duration::from_millis(400));
    }

    #[test]
    fn test_stagger_skills_one_block_each_in_order() {
        let rendered = stagger(SKILLS, Duration::from_millis(100))
            .map(|(_, s)| s.name)
            .collect::<Vec<_>>();
        let expected = SKILLS.iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_stagger_projects_one_block_each_in_order() {
        let rendered = stagger(PROJECTS, Duration::from_millis(200)).collect::<Vec<_>>();
        assert_eq!(rendered.len(), PROJECTS.len());
        for (i, (delay, project)) in rendered.iter().enumerate() {
            assert_eq!(project.title, PROJECTS[i].title);
            assert_eq!(*delay, Duration::from_millis(200 * i as u64));
        }
    }
}
