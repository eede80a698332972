//! Global CSS styles for the portfolio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #ffffff;
  --card: #ffffff;
  --border: #e4e4e7;
  --foreground: #09090b;
  --muted-foreground: #71717a;
  --primary: #18181b;
  --primary-foreground: #fafafa;
  --highlight: #6366f1;
  --success: #16a34a;
  --danger: #dc2626;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --radius: 0.5rem;
  --header-height: 3.5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Shell === */
.shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.shell-main {
  flex: 1;
}

.container {
  width: 100%;
  max-width: 1100px;
  margin: 0 auto;
  padding: 4rem 1rem;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  width: 100%;
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(8px);
}

.site-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1100px;
  height: var(--header-height);
  margin: 0 auto;
  padding: 0 1rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted-foreground);
  transition: color 150ms ease;
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-toggle {
  display: none;
}

.nav-panel {
  display: none;
  overflow: hidden;
}

.nav-panel .nav-link {
  display: block;
  height: 2.75rem;
  line-height: 2.75rem;
  padding: 0 1rem;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-toggle { display: inline-flex; }
  .nav-panel { display: block; }
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--border);
  padding: 1.5rem 1rem;
}

.site-footer-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1100px;
  margin: 0 auto;
  gap: 1rem;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.footer-brand,
.social-links {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.social-links a:hover {
  color: var(--primary);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  height: 2.5rem;
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background 150ms ease, color 150ms ease;
}

.btn:disabled {
  pointer-events: none;
  opacity: 0.5;
}

.btn-primary {
  background: var(--primary);
  color: var(--primary-foreground);
  border: none;
}

.btn-primary:hover {
  background: color-mix(in srgb, var(--primary) 90%, transparent);
}

.btn-outline {
  background: var(--background);
  border: 1px solid var(--border);
}

.btn-ghost {
  background: transparent;
  border: none;
}

.w-full {
  width: 100%;
}

/* === Forms === */
.form {
  width: 100%;
  max-width: 32rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.input-label {
  display: block;
  margin-bottom: 0.25rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted-foreground);
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid color-mix(in srgb, var(--highlight) var(--accent-mix, 0%), var(--border));
  border-radius: var(--radius);
  font: inherit;
  transform-origin: center;
}

.input-field:focus {
  outline: none;
}

.textarea {
  resize: vertical;
}

.status-line {
  margin-top: 1rem;
  text-align: center;
}

.status-success { color: var(--success); }
.status-error { color: var(--danger); }

/* === Home === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: calc(100vh - 10rem);
  text-align: center;
  padding: 0 1rem;
}

.hero-mark { margin-bottom: 2rem; }

.page-mark {
  display: flex;
  justify-content: center;
  margin-bottom: 2rem;
}
.hero-name { font-size: 3.5rem; font-weight: 700; margin-bottom: 1rem; }
.hero-tagline { font-size: 1.5rem; color: var(--muted-foreground); }

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(9rem, 1fr));
  gap: 2rem;
  justify-items: center;
}

.skill-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  cursor: default;
}

.skill-icon {
  width: 4rem;
  height: 4rem;
  color: color-mix(in srgb, var(--highlight) var(--accent-mix, 0%), var(--foreground));
}

.skill-name {
  font-size: 0.875rem;
  font-weight: 500;
  text-align: center;
}

/* === Qualifications === */
.qualification-list {
  max-width: 42rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.card {
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.card-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.25rem; }
.card-meta { font-size: 0.875rem; color: var(--muted-foreground); }

/* === Projects === */
.preview-row {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
  height: 16rem;
  margin-bottom: 4rem;
  perspective: 800px;
}

.preview-stage {
  display: flex;
  align-items: center;
  justify-content: center;
  transform-style: preserve-3d;
}

.preview-solid {
  width: 6rem;
  height: 6rem;
  transform-style: preserve-3d;
}

.preview-box { background: #ff6347; }
.preview-sphere { background: #4682b4; border-radius: 50%; }
.preview-cone {
  width: 0;
  height: 0;
  border-left: 3rem solid transparent;
  border-right: 3rem solid transparent;
  border-bottom: 6rem solid #32cd32;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
}

.project-description {
  flex-grow: 1;
  margin-bottom: 1rem;
  color: var(--muted-foreground);
}

.project-links {
  display: flex;
  gap: 1rem;
}

/* === Spinning cube === */
.cube-scene {
  perspective: 400px;
  display: inline-block;
}

.cube {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
}

.cube-face {
  position: absolute;
  top: 0;
  left: 0;
  border: 1px solid rgba(99, 102, 241, 0.6);
  background: rgba(99, 102, 241, 0.15);
}

/* === Not found === */
.not-found {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}
"#;
