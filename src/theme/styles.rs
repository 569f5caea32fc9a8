//! Global CSS styles for Profile Hero.
//!
//! Static look only. Values that move with the expand/collapse morph are
//! written inline by `profilehero_ui::style`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --screen-black: #000000;
  --system-gray5: #2c2c2e;
  --material-thin: rgba(120, 120, 128, 0.36);

  /* Text */
  --text-primary: #ffffff;
  --text-gray: rgb(142, 142, 147);

  /* Typography */
  --font-system: -apple-system, BlinkMacSystemFont, 'SF Pro Display', 'Segoe UI', Roboto, sans-serif;
  --text-title3: 1.25rem;
  --text-large-title: 2.125rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-system);
  background: var(--screen-black);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
  user-select: none;
}

/* === Screen === */
.profile-screen {
  position: relative;
  width: 100vw;
  height: 100vh;
  background: var(--screen-black);
  overflow: hidden;
}

.profile-column {
  display: flex;
  flex-direction: column;
  width: 100%;
  height: 100%;
}

/* === Avatar === */
.avatar {
  flex-shrink: 0;
  overflow: hidden;
  cursor: pointer;
}

.avatar__img {
  display: block;
  width: 100%;
  height: 100%;
  object-fit: cover;
  pointer-events: none;
}

.avatar-placeholder {
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--material-thin);
  backdrop-filter: blur(20px);
  color: var(--text-primary);
  cursor: pointer;
}

/* === Bio === */
.bio {
  display: flex;
  flex-direction: column;
  margin-top: 8px;
  width: 100%;
}

.bio__name {
  font-size: var(--text-large-title);
  line-height: 1.2;
  color: var(--text-primary);
}

.bio__title {
  font-size: 1.0625rem;
  color: var(--text-gray);
}

.divider {
  height: 1px;
  width: 100%;
  margin-top: 8px;
  background: var(--text-primary);
}

/* === Action Bar === */
.action-bar {
  display: flex;
  align-items: center;
  width: 100%;
}

.btn-pill {
  flex: 1;
  height: 45px;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  border: none;
  border-radius: 30px;
  background: var(--text-primary);
  color: #000000;
  font-family: var(--font-system);
  font-size: var(--text-title3);
  font-weight: 700;
  cursor: pointer;
}

.btn-pill:active {
  opacity: 0.7;
}

.btn-circle {
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 10px;
  border-radius: 50%;
  border: 1px solid transparent;
  background:
    linear-gradient(var(--system-gray5), var(--system-gray5)) padding-box,
    linear-gradient(to top right, #000000, #8e8e93) border-box;
  color: var(--text-primary);
  cursor: pointer;
}

.btn-circle:active {
  opacity: 0.7;
}

.btn-circle .icon {
  display: block;
}

/* === Change Photo === */
.change-photo {
  position: absolute;
  top: 16px;
}

.change-photo__btn .icon {
  width: 23px;
  height: 23px;
}

/* === Picker === */
.picker-scrim {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
  pointer-events: none;
}
"#;
