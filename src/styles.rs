// Static CSS injected alongside the effects that need it.

pub const CURSOR_CSS: &str = r#"
.custom-cursor { position: fixed; pointer-events: none; z-index: 99999; mix-blend-mode: difference; }
.cursor-dot {
  width: 8px; height: 8px; background: var(--theme-accent, #34d399); border-radius: 50%;
  position: absolute; transform: translate(-50%, -50%); transition: transform 0.1s, background 0.3s;
}
.cursor-ring {
  width: 40px; height: 40px; border: 2px solid var(--theme-accent, #34d399); border-radius: 50%;
  position: absolute; transform: translate(-50%, -50%); opacity: 0.5;
  transition: transform 0.15s ease-out, opacity 0.3s, border-color 0.3s;
}
.custom-cursor.hover .cursor-dot { transform: translate(-50%, -50%) scale(2); }
.custom-cursor.hover .cursor-ring { transform: translate(-50%, -50%) scale(1.5); opacity: 0.8; }
.custom-cursor.clicking .cursor-ring { transform: translate(-50%, -50%) scale(0.8); }
body { cursor: none !important; }
a, button, .crop-item, .calculate-btn, .cta-main, .input-card { cursor: none !important; }
"#;

pub const PROGRESS_CSS: &str = r#"
.scroll-progress {
  position: fixed; top: 0; left: 0; width: 100%; height: 3px;
  background: rgba(255,255,255,0.1); z-index: 99998;
}
.scroll-progress-fill {
  height: 100%; transform-origin: left; transform: scaleX(0);
  background: linear-gradient(90deg, var(--theme-primary, #059669), var(--theme-accent, #34d399));
}
"#;

pub const GLASS_CSS: &str = r#"
.input-card {
  background: rgba(255, 255, 255, 0.03) !important;
  backdrop-filter: blur(20px) saturate(180%) !important;
  -webkit-backdrop-filter: blur(20px) saturate(180%) !important;
  border: 1px solid rgba(255, 255, 255, 0.08) !important;
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3), inset 0 1px 0 rgba(255, 255, 255, 0.1) !important;
  transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1) !important;
}
.input-card:hover {
  background: rgba(255, 255, 255, 0.06) !important;
  border-color: rgba(255, 255, 255, 0.15) !important;
  transform: translateY(-4px) scale(1.02) !important;
  box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(255, 255, 255, 0.15),
    0 0 30px var(--theme-glow, rgba(16, 185, 129, 0.2)) !important;
}
.rent-result {
  background: rgba(255, 255, 255, 0.02) !important;
  backdrop-filter: blur(30px) saturate(200%) !important;
  -webkit-backdrop-filter: blur(30px) saturate(200%) !important;
}
"#;

pub const TITLE_CSS: &str = r#"
.hero-title {
  background: linear-gradient(90deg, var(--theme-accent, #34d399), var(--theme-primary, #059669),
    var(--theme-secondary, #10b981), var(--theme-accent, #34d399)) !important;
  background-size: 300% 100% !important;
  -webkit-background-clip: text !important;
  -webkit-text-fill-color: transparent !important;
  background-clip: text !important;
  animation: gradientShift 6s ease infinite !important;
}
@keyframes gradientShift { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
.hero-letter { display: inline-block; transition: transform 0.3s ease; }
.hero-letter:hover { transform: translateY(-5px) scale(1.1); color: var(--theme-accent); }
"#;

/// Inline style of a freshly spawned ripple at a local point.
pub fn ripple_style(left: f32, top: f32, size_px: f64) -> String {
    format!(
        "position: absolute; width: {size}px; height: {size}px; background: rgba(255,255,255,0.4); \
         border-radius: 50%; transform: translate(-50%, -50%) scale(0); left: {left}px; top: {top}px; \
         pointer-events: none;",
        size = size_px,
        left = left,
        top = top
    )
}

/// Inline style of a drag particle at a client point.
pub fn particle_style(x: f64, y: f64, size_px: f64) -> String {
    format!(
        "position: fixed; left: {x}px; top: {y}px; width: {size}px; height: {size}px; \
         background: var(--theme-accent, #34d399); border-radius: 50%; pointer-events: none; \
         z-index: 9999; box-shadow: 0 0 10px var(--theme-accent, #34d399);",
        x = x,
        y = y,
        size = size_px
    )
}
