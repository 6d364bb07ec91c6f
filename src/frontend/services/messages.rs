//! User-facing text. The product ships in Arabic.

use crate::backend::services::ContentKind;
use crate::backend::services::credentials::{CredentialError, MIN_PASSWORD_LEN};

pub const BRAND: &str = "AI Studio";

pub const ACCESS_DENIED: &str = "ليس لديك صلاحيات الوصول لهذه الصفحة";
pub const EMPTY_PROMPT: &str = "الرجاء إدخال وصف للمحتوى";
pub const COMING_SOON: &str = "سيتم إضافة هذه الوظيفة قريباً";
pub const RETENTION_NOTE: &str =
    "المحتوى المولّد يتم حفظه لمدة 7 أيام، الرجاء تحميله قبل انتهاء المدة";

pub const SIGN_IN: &str = "تسجيل الدخول";
pub const SIGN_UP: &str = "إنشاء حساب";
pub const START_FREE: &str = "ابدأ مجاناً";
pub const CHECK_EMAIL: &str = "تم إنشاء الحساب، الرجاء تأكيد بريدك الإلكتروني";
pub const SIGNED_IN: &str = "تم تسجيل الدخول بنجاح";

pub const CREDITS: &str = "رصيد";
pub const BACK_TO_DASHBOARD: &str = "العودة للوحة المستخدم";
pub const ADMIN_PANEL: &str = "لوحة الإدارة";
pub const PAGE_NOT_FOUND: &str = "الصفحة غير موجودة";

pub fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Image => "صورة",
        ContentKind::Video => "فيديو",
    }
}

pub fn cost_label(kind: ContentKind) -> String {
    format!("{} {CREDITS}", kind.cost())
}

pub fn insufficient_credits(required: i64) -> String {
    format!("رصيدك غير كافٍ. تحتاج إلى {required} {CREDITS}")
}

pub fn generate_label(kind: ContentKind) -> String {
    format!("توليد {}", kind_label(kind))
}

pub fn credential_error(error: CredentialError) -> String {
    match error {
        CredentialError::InvalidEmail => "الرجاء إدخال بريد إلكتروني صحيح".to_string(),
        CredentialError::ShortPassword => {
            format!("كلمة المرور يجب أن تكون {MIN_PASSWORD_LEN} أحرف على الأقل")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_include_cost() {
        assert!(cost_label(ContentKind::Video).starts_with("50 "));
        assert!(insufficient_credits(10).contains("10"));
        assert!(generate_label(ContentKind::Image).ends_with(kind_label(ContentKind::Image)));
    }
}
