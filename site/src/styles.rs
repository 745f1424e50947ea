//! CSS for the landing page.
//!
//! Inlined into the exported document and injected by the browser build, so
//! both render from the same stylesheet. Dark theme, cyan accent.

/// Complete stylesheet.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-deep: #05050a;
    --bg-raised: #0a0a14;
    --accent: #00d2ff;
    --accent-hover: #00b4db;
    --accent-blue: #3b82f6;
    --text-bright: #ffffff;
    --text-body: #cbd5e1;
    --text-dim: #94a3b8;
    --text-muted: #64748b;
    --border-subtle: rgba(30, 58, 138, 0.2);
    --border-visible: rgba(30, 58, 138, 0.3);
    --ok: #22c55e;
    --warn: #facc15;
    --container-max: 1280px;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg-deep);
    color: var(--text-body);
    font-family: var(--font-sans);
    line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.page { min-height: 100vh; }

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}
.container--narrow { max-width: 1024px; }

.icon { display: inline-block; vertical-align: middle; flex-shrink: 0; }
.icon-accent { color: var(--accent); }
.icon-ok { color: var(--ok); }

/* Brand */
.brand { display: inline-flex; align-items: center; gap: 8px; }
.brand-title {
    font-size: 1.5rem;
    font-weight: 800;
    letter-spacing: -0.05em;
    color: var(--text-bright);
}
.brand-accent { color: var(--accent); }

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    transition: all 0.3s ease;
}
.nav--scrolled {
    background: rgba(5, 5, 10, 0.9);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border-visible);
}
.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 16px 24px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-links { display: none; align-items: center; gap: 32px; }
.nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-body);
    transition: color 0.2s;
}
.nav-link:hover { color: var(--accent); }
.nav-cta {
    padding: 10px 20px;
    background: var(--accent);
    color: var(--bg-deep);
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 700;
    transition: all 0.2s;
}
.nav-cta:hover { background: var(--accent-hover); transform: translateY(-2px); }
.nav-toggle {
    background: none;
    border: 0;
    color: var(--text-bright);
    cursor: pointer;
    padding: 4px;
}
.nav-drawer {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: var(--bg-raised);
    border-bottom: 1px solid var(--border-visible);
    padding: 24px;
}
.nav-drawer-inner { display: flex; flex-direction: column; gap: 16px; }
.drawer-link { font-size: 1.125rem; font-weight: 500; color: var(--text-body); }
.drawer-link:hover { color: var(--accent); }
.drawer-cta {
    display: block;
    text-align: center;
    padding: 12px;
    background: var(--accent);
    color: var(--bg-deep);
    border-radius: 12px;
    font-weight: 700;
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-toggle, .nav-drawer { display: none; }
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 16px 32px;
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.125rem;
    transition: all 0.2s;
}
.btn-primary { background: var(--accent); color: var(--bg-deep); }
.btn-primary:hover { background: var(--accent-hover); transform: translateY(-4px); }
.btn-secondary { border: 1px solid rgba(59, 130, 246, 0.3); color: var(--text-bright); }
.btn-secondary:hover { background: rgba(59, 130, 246, 0.1); }
.btn-outline { border: 1px solid var(--accent); color: var(--accent); }
.btn-outline:hover { background: var(--accent); color: var(--bg-deep); }

/* Hero */
.hero { position: relative; padding: 128px 0 80px; overflow: hidden; }
.hero-glow {
    position: absolute;
    border-radius: 9999px;
    filter: blur(120px);
    pointer-events: none;
}
.hero-glow--right { top: 0; right: 0; width: 50%; height: 50%; background: rgba(0, 210, 255, 0.05); transform: translateY(-50%); }
.hero-glow--left { bottom: 0; left: 0; width: 33%; height: 33%; background: rgba(30, 58, 138, 0.1); transform: translateY(50%); }
.hero-grid { position: relative; z-index: 10; display: grid; gap: 48px; align-items: center; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 12px;
    border-radius: 9999px;
    background: rgba(30, 58, 138, 0.2);
    border: 1px solid rgba(59, 130, 246, 0.2);
    color: var(--accent);
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 24px;
}
.hero-title {
    font-size: 3rem;
    font-weight: 800;
    color: var(--text-bright);
    line-height: 1.1;
    letter-spacing: -0.025em;
    margin: 0 0 32px;
}
.hero-title-accent {
    background: linear-gradient(90deg, var(--accent), var(--accent-blue));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-description { font-size: 1.125rem; color: var(--text-dim); max-width: 36rem; margin: 0 0 40px; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 24px; }
.hero-stats { margin-top: 48px; display: flex; gap: 32px; }
.hero-stat + .hero-stat { border-left: 1px solid #1e293b; padding-left: 32px; }
.hero-stat-value { color: var(--text-bright); font-size: 1.5rem; font-weight: 700; }
.hero-stat-label { color: var(--text-muted); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; }

.hero-terminal {
    display: none;
    padding: 48px;
    background: var(--bg-raised);
    border-radius: 24px;
    border: 1px solid var(--border-visible);
    box-shadow: 0 0 24px rgba(0, 210, 255, 0.08);
}
.terminal-header { display: flex; align-items: center; gap: 8px; margin-bottom: 32px; }
.terminal-dot { width: 12px; height: 12px; border-radius: 9999px; }
.terminal-dot.red { background: #ef4444; }
.terminal-dot.yellow { background: #eab308; }
.terminal-dot.green { background: var(--ok); }
.terminal-title { margin-left: auto; color: var(--text-muted); font-size: 0.75rem; font-family: var(--font-mono); }
.terminal-body { font-family: var(--font-mono); font-size: 0.875rem; display: flex; flex-direction: column; gap: 16px; }
.terminal-line { display: flex; gap: 8px; }
.terminal-prompt { color: var(--accent); }
.terminal-command { color: var(--text-body); }
.terminal-output { padding-left: 16px; }
.terminal-output.success { color: #4ade80; }
.terminal-output.warning { color: var(--warn); }
.terminal-output.highlight { color: var(--accent); }
.terminal-footer {
    margin-top: 32px;
    padding-top: 32px;
    border-top: 1px solid #1e293b;
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--text-dim);
}

@media (min-width: 1024px) {
    .hero { padding: 192px 0 128px; }
    .hero-grid { grid-template-columns: 1fr 1fr; }
    .hero-title { font-size: 4.5rem; }
    .hero-terminal { display: block; }
}

/* Sections */
.section { padding: 96px 0; position: relative; overflow: hidden; }
.section--dark { background: var(--bg-deep); }
.section--raised { background: var(--bg-raised); }
.section--centered { text-align: center; }
.section-header { text-align: center; margin-bottom: 64px; }
.section-eyebrow {
    color: var(--accent-blue);
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
    margin: 0 0 16px;
}
.section-title { font-size: 1.875rem; font-weight: 800; color: var(--text-bright); margin: 0 0 24px; }
.section-lead { color: var(--text-dim); max-width: 42rem; margin: 0 auto 32px; }

@media (min-width: 1024px) {
    .section-title { font-size: 3rem; }
}

/* Services */
.services-grid { display: grid; gap: 32px; }
.service-card {
    padding: 32px;
    background: var(--bg-raised);
    border-radius: 16px;
    border: 1px solid var(--border-subtle);
    box-shadow: 0 0 24px rgba(0, 210, 255, 0.08);
    transition: all 0.3s;
}
.service-card:hover { transform: translateY(-8px); border-color: rgba(0, 210, 255, 0.4); }
.service-icon {
    width: 56px;
    height: 56px;
    background: rgba(30, 58, 138, 0.2);
    border-radius: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 24px;
}
.service-title { font-size: 1.25rem; font-weight: 700; color: var(--text-bright); margin: 0 0 16px; }
.service-description { color: var(--text-dim); margin: 0 0 24px; }
.service-impact {
    padding-top: 24px;
    border-top: 1px solid rgba(30, 41, 59, 0.5);
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 0.875rem;
    font-weight: 500;
}
.service-impact strong { color: var(--text-bright); font-weight: 500; }

@media (min-width: 768px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .services-grid { grid-template-columns: repeat(4, 1fr); } }

/* Development */
.development-grid { display: grid; gap: 64px; align-items: center; }
.feature-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.feature-tile {
    padding: 24px;
    background: var(--bg-deep);
    border-radius: 16px;
    border: 1px solid var(--border-subtle);
    text-align: center;
}
.feature-tile--offset { margin-top: 32px; }
.feature-title { color: var(--text-bright); font-weight: 700; margin: 16px 0 8px; }
.feature-text { font-size: 0.75rem; color: var(--text-muted); line-height: 1.25; margin: 0; }
.development-copy .section-eyebrow,
.development-copy .section-title { text-align: left; }
.development-copy .section-lead { margin-left: 0; }
.bullet-list { list-style: none; padding: 0; margin: 0 0 40px; display: flex; flex-direction: column; gap: 16px; }
.bullet { display: flex; align-items: center; gap: 12px; color: var(--text-body); }
.bullet-icon {
    width: 20px;
    height: 20px;
    border-radius: 9999px;
    background: rgba(0, 210, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
}

@media (min-width: 1024px) { .development-grid { grid-template-columns: 1fr 1fr; } }

/* Trust */
.ethics-grid { display: grid; gap: 32px; }
.ethics-card {
    padding: 40px;
    background: var(--bg-raised);
    border-radius: 16px;
    border: 1px solid rgba(30, 58, 138, 0.1);
    transition: border-color 0.2s;
}
.ethics-card:hover { border-color: rgba(59, 130, 246, 0.2); }
.ethics-title { font-size: 1.25rem; font-weight: 700; color: var(--text-bright); margin: 0 0 16px; }
.ethics-text { color: var(--text-dim); font-size: 0.875rem; margin: 0; }

@media (min-width: 768px) { .ethics-grid { grid-template-columns: repeat(3, 1fr); } }

/* Contact */
.contact-panel {
    position: relative;
    overflow: hidden;
    text-align: center;
    padding: 48px;
    border-radius: 48px;
    border: 1px solid var(--border-visible);
    background: linear-gradient(180deg, rgba(30, 58, 138, 0.1), var(--bg-raised));
}
.contact-glow {
    position: absolute;
    top: 0;
    right: 0;
    width: 256px;
    height: 256px;
    border-radius: 9999px;
    background: rgba(0, 210, 255, 0.1);
    filter: blur(60px);
    transform: translate(50%, -50%);
}
.contact-card {
    background: var(--bg-deep);
    padding: 32px;
    border-radius: 16px;
    border: 1px solid var(--border-subtle);
    max-width: 28rem;
    margin: 0 auto 40px;
}
.contact-card-header {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    margin-bottom: 16px;
    font-weight: 500;
}
.contact-email {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--accent);
    text-shadow: 0 0 12px rgba(0, 210, 255, 0.5);
    word-break: break-all;
}
.contact-email:hover { text-decoration: underline; }
.contact-note {
    color: var(--text-muted);
    font-size: 0.875rem;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
}

/* Footer */
.footer { padding: 48px 0; background: var(--bg-deep); border-top: 1px solid var(--border-subtle); }
.footer-row { display: flex; flex-direction: column; align-items: center; gap: 32px; }
.footer .brand-title { font-size: 1.25rem; }
.footer-links { display: flex; gap: 24px; }
.footer-link { color: var(--text-dim); transition: all 0.2s; }
.footer-link:hover { color: var(--accent); filter: drop-shadow(0 0 8px var(--accent)); }
.footer-copyright { color: var(--text-muted); font-size: 0.875rem; margin: 0; }

@media (min-width: 768px) {
    .footer-row { flex-direction: row; justify-content: space-between; }
}
"#;
