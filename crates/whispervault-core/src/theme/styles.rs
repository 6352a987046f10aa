//! Stylesheet for elements the effects create at runtime.
//!
//! Covers ripple geometry and animation, the navigation overlay and the
//! dialog typography. Static page styles live in the site's own CSS.

/// `id` of the injected `<style>` element
pub const DYNAMIC_STYLES_ID: &str = "whisper-vault-dynamic";

pub const DYNAMIC_STYLES: &str = r#"
/* === Buttons === */
.card-btn, .cta-btn {
  position: relative;
  overflow: hidden;
}

/* === Ripple === */
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.3);
  transform: scale(0);
  animation: ripple-animation 0.6s ease-out;
  pointer-events: none;
}

@keyframes ripple-animation {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

/* === Navigation overlay === */
.nav-message {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: rgba(0, 0, 0, 0.9);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 10000;
  animation: fadeIn 0.3s ease;
}

.message-content {
  background: linear-gradient(135deg, #1a0a1a 0%, #0a0a0a 100%);
  border: 2px solid #d4af37;
  border-radius: 15px;
  padding: 40px;
  text-align: center;
  max-width: 500px;
  box-shadow: 0 20px 60px rgba(212, 175, 55, 0.3);
}

.message-content p {
  color: #e8e8e8;
  font-size: 20px;
  margin-bottom: 10px;
  font-family: 'Playfair Display', serif;
}

.message-note {
  font-size: 14px !important;
  color: #a8a8a8 !important;
  font-family: 'Poppins', sans-serif !important;
  margin-top: 20px !important;
}

/* === Dismiss button === */
.close-msg {
  margin-top: 25px;
  background: #d4af37;
  border: none;
  color: #0a0a0a;
  padding: 12px 30px;
  font-size: 14px;
  font-weight: 600;
  letter-spacing: 1px;
  cursor: pointer;
  border-radius: 5px;
  transition: all 0.3s ease;
  font-family: 'Poppins', sans-serif;
}

.close-msg:hover {
  transform: scale(1.05);
  box-shadow: 0 5px 20px rgba(212, 175, 55, 0.5);
}
"#;
