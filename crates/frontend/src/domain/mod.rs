pub mod a001_user;
pub mod a002_coach;
pub mod a003_course;
pub mod a004_course_session;
pub mod a005_coupon;
pub mod a006_order;
pub mod a007_transaction;
pub mod a008_ticket;
pub mod a009_notification;
