use utoipa::OpenApi;

use crate::modules::auth::model::{
    CsrfResponse, LoginForm, LoginResponse, MessageResponse, RegisterForm, RegisterResponse,
};
use crate::modules::classes::model::Classe;
use crate::modules::courses::model::{
    Course, CourseActionResponse, CreateCourseDto, UpdateCourseDto,
};
use crate::modules::languages::model::Language;
use crate::modules::lessons::model::{
    CreateLessonDto, Lesson, LessonActionResponse, LessonNamesResponse, LessonOfDay,
};
use crate::modules::roles::model::Role;
use crate::modules::timetables::model::TimeTable;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::csrf_token,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::roles::controller::list_roles,
        crate::modules::classes::controller::list_classes,
        crate::modules::languages::controller::list_languages,
        crate::modules::lessons::controller::create_lesson,
        crate::modules::lessons::controller::today_lessons,
        crate::modules::lessons::controller::lesson_names,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::courses_by_lesson,
        crate::modules::courses::controller::search_courses,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            CsrfResponse,
            RegisterForm,
            RegisterResponse,
            LoginForm,
            LoginResponse,
            MessageResponse,
            Role,
            Classe,
            Language,
            TimeTable,
            Lesson,
            CreateLessonDto,
            LessonActionResponse,
            LessonOfDay,
            LessonNamesResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            CourseActionResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Registration, login and session endpoints"),
        (name = "Reference data", description = "Roles, classes and languages for the registration form"),
        (name = "Lessons", description = "Lesson management and the unlock countdown listing"),
        (name = "Courses", description = "Course content management and search")
    ),
    info(
        title = "Collège en ligne API",
        version = "0.1.0",
        description = "School platform backend: role-based registration and login, lesson timetables with unlock countdowns, and course content.",
        contact(
            name = "API Support",
            email = "support@college-en-ligne.fr"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
