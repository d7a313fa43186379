//! Global CSS styles for the CGN site.
//!
//! Dark steel palette with a warm accent, mobile breakpoint at 768px.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* STEEL (Backgrounds) */
  --steel-black: #0d0f12;
  --steel-dark: #16191e;
  --steel-border: #2a2f36;

  /* ACCENT (Highlights, calls to action) */
  --accent: #f2a33a;
  --accent-glow: rgba(242, 163, 58, 0.35);

  /* WHATSAPP */
  --whatsapp: #25d366;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.75);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-sans: 'Montserrat', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 1s ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--steel-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 2rem;
  background: rgba(13, 15, 18, 0.92);
  border-bottom: 1px solid var(--steel-border);
}

.logo-container {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.logo {
  height: 48px;
}

.cgn-title {
  height: 32px;
}

.nav {
  display: flex;
  gap: 1.5rem;
}

.nav a {
  font-weight: 600;
  letter-spacing: 0.03em;
  transition: color var(--transition-fast);
}

.nav a:hover {
  color: var(--accent);
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  cursor: pointer;
}

.hamburger span {
  width: 26px;
  height: 3px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.open span:nth-child(1) {
  transform: translateY(8px) rotate(45deg);
}

.hamburger.open span:nth-child(2) {
  opacity: 0;
}

.hamburger.open span:nth-child(3) {
  transform: translateY(-8px) rotate(-45deg);
}

/* === Sections === */
section {
  padding: 6rem 2rem 4rem;
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

section.in-view {
  opacity: 1;
  transform: none;
}

.titulo-secao {
  text-align: center;
  font-size: 2rem;
  margin-bottom: 2rem;
}

.highlight {
  color: var(--accent);
  font-weight: 700;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  background: linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.8)), var(--steel-dark);
}

.hero h1 {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.hero p {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.btn-whatsapp {
  display: inline-block;
  padding: 0.9rem 2rem;
  border-radius: 999px;
  background: var(--whatsapp);
  color: #fff;
  font-weight: 700;
  transition: transform var(--transition-fast);
}

.btn-whatsapp:hover {
  transform: scale(1.05);
}

/* === Sobre === */
.sobre {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 3rem;
  align-items: center;
  max-width: 1100px;
  margin: 0 auto;
}

.sobre-texto h2 {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.sobre-texto p {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.sobre-imagem img {
  width: 100%;
  max-width: 360px;
}

/* === Trabalhos === */
.cards-trabalhos {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

.card-trabalho {
  padding: 2rem 1.5rem;
  background: var(--steel-dark);
  border: 1px solid var(--steel-border);
  border-radius: 12px;
  text-align: center;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card-trabalho:hover {
  transform: scale(1.05);
  box-shadow: 0 0 25px white;
}

.card-trabalho p {
  color: var(--text-muted);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.85);
}

.modal-content {
  position: relative;
  width: min(1000px, 92vw);
  max-height: 88vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--steel-dark);
  border-radius: 12px;
}

.modal-content .close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

.modal-images {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.modal-images img {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  border-radius: 8px;
  cursor: zoom-in;
}

.ver-mais-container {
  margin-top: 1.5rem;
  text-align: center;
}

.btn-ver-mais {
  padding: 0.6rem 1.8rem;
  border: 1px solid var(--accent);
  border-radius: 999px;
  background: transparent;
  color: var(--accent);
  font-weight: 700;
  cursor: pointer;
}

.btn-ver-mais:hover {
  background: var(--accent-glow);
}

.ver-mais-info {
  margin-top: 0.5rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Zoom === */
.zoom-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.95);
  cursor: zoom-out;
}

.zoomed-img {
  max-width: 92vw;
  max-height: 92vh;
  border-radius: 8px;
  cursor: default;
}

/* === Depoimentos === */
.depoimentos-lista {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

blockquote {
  padding: 1.5rem;
  border-left: 4px solid var(--accent);
  background: var(--steel-dark);
  border-radius: 8px;
}

blockquote span {
  display: block;
  margin-top: 0.75rem;
  color: var(--text-muted);
}

/* === Contato === */
.empresa-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto 3rem;
}

.empresa-card {
  padding: 1.5rem;
  background: var(--steel-dark);
  border: 1px solid var(--steel-border);
  border-radius: 12px;
  transition: transform var(--transition-normal);
}

.empresa-card:hover {
  transform: scale(1.05);
}

.empresa-card h3 {
  margin: 0.5rem 0;
}

.icon-white {
  color: #fff;
}

.tel-link {
  display: block;
  color: var(--text-secondary);
}

.tel-link:hover {
  color: var(--accent);
}

.form-contato {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-width: 560px;
  margin: 0 auto;
}

.form-contato input,
.form-contato textarea {
  padding: 0.75rem 1rem;
  background: var(--steel-dark);
  border: 1px solid var(--steel-border);
  border-radius: 8px;
  color: var(--text-primary);
  font-family: inherit;
}

.form-contato button {
  padding: 0.8rem;
  border: none;
  border-radius: 8px;
  background: var(--accent);
  color: var(--steel-black);
  font-weight: 700;
  cursor: pointer;
}

/* === Footer === */
footer {
  padding: 2rem;
  text-align: center;
  border-top: 1px solid var(--steel-border);
  color: var(--text-muted);
}

.socials {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 0.75rem;
  font-size: 1.25rem;
}

.btn-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 40;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: 50%;
  background: var(--accent);
  color: var(--steel-black);
  font-size: 1.25rem;
  cursor: pointer;
}

.fundo-dinamico {
  position: fixed;
  inset: 0;
  z-index: -1;
  background: radial-gradient(circle at 20% 20%, rgba(242, 163, 58, 0.08), transparent 60%);
  pointer-events: none;
}

/* === Mobile === */
@media (max-width: 768px) {
  .header {
    padding: 0.75rem 1rem;
  }

  .hamburger {
    display: flex;
  }

  .nav {
    position: fixed;
    top: 72px;
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: center;
    padding: 1.5rem 0;
    background: var(--steel-dark);
    transform: translateY(-150%);
    transition: transform var(--transition-normal);
  }

  .nav.open {
    transform: translateY(0);
  }

  .hero h1 {
    font-size: 2rem;
  }

  .sobre {
    grid-template-columns: 1fr;
  }
}
"#;
