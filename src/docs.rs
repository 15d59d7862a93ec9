use utoipa::OpenApi;

use varsity_core::{ErrorMessage, ErrorResponse, PaginationMeta};
use varsity_models::academic_departments::{
    AcademicDepartment, CreateAcademicDepartmentDto, UpdateAcademicDepartmentDto,
};
use varsity_models::academic_faculties::{
    AcademicFaculty, CreateAcademicFacultyDto, UpdateAcademicFacultyDto,
};
use varsity_models::academic_semesters::{
    AcademicSemester, CreateAcademicSemesterDto, UpdateAcademicSemesterDto,
};
use varsity_models::auth::{LoginRequest, LoginResponse};
use varsity_models::faculties::{CreateFacultyDto, Faculty, UpdateFacultyDto};
use varsity_models::name::{HumanName, NamePatch};
use varsity_models::students::{CreateStudentDto, Student, UpdateStudentDto};
use varsity_models::users::{CreateUserDto, UpdateUserDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_all_users,
        crate::modules::users::controller::get_single_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_all_students,
        crate::modules::students::controller::get_single_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::faculties::controller::create_faculty,
        crate::modules::faculties::controller::get_all_faculties,
        crate::modules::faculties::controller::get_single_faculty,
        crate::modules::faculties::controller::update_faculty,
        crate::modules::faculties::controller::delete_faculty,
        crate::modules::academic_faculties::controller::create_academic_faculty,
        crate::modules::academic_faculties::controller::get_all_academic_faculties,
        crate::modules::academic_faculties::controller::get_single_academic_faculty,
        crate::modules::academic_faculties::controller::update_academic_faculty,
        crate::modules::academic_faculties::controller::delete_academic_faculty,
        crate::modules::academic_semesters::controller::create_academic_semester,
        crate::modules::academic_semesters::controller::get_all_academic_semesters,
        crate::modules::academic_semesters::controller::get_single_academic_semester,
        crate::modules::academic_semesters::controller::update_academic_semester,
        crate::modules::academic_semesters::controller::delete_academic_semester,
        crate::modules::academic_departments::controller::create_academic_department,
        crate::modules::academic_departments::controller::get_all_academic_departments,
        crate::modules::academic_departments::controller::get_single_academic_department,
        crate::modules::academic_departments::controller::update_academic_department,
        crate::modules::academic_departments::controller::delete_academic_department,
    ),
    components(
        schemas(
            User,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Faculty,
            CreateFacultyDto,
            UpdateFacultyDto,
            AcademicFaculty,
            CreateAcademicFacultyDto,
            UpdateAcademicFacultyDto,
            AcademicSemester,
            CreateAcademicSemesterDto,
            UpdateAcademicSemesterDto,
            AcademicDepartment,
            CreateAcademicDepartmentDto,
            UpdateAcademicDepartmentDto,
            HumanName,
            NamePatch,
            LoginRequest,
            LoginResponse,
            ErrorMessage,
            ErrorResponse,
            PaginationMeta,
        )
    ),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "Application account management"),
        (name = "Students", description = "Student records"),
        (name = "Faculties", description = "Teaching staff records"),
        (name = "Academic Faculties", description = "Academic faculty entities"),
        (name = "Academic Semesters", description = "Academic semester entities"),
        (name = "Academic Departments", description = "Academic department entities"),
    )
)]
pub struct ApiDoc;
