use crate::{
    handlers::upload::UploadForm,
    models::{
        AboutCompany, Banner, BasicCompanyInfo, ContactUs, UpdateAboutCompanyRequest,
        UpdateBannerRequest, UpdateBasicCompanyInfoRequest, UpdateContactUsRequest,
        UpdateUserRequest, UploadedFileMetadata, User,
    },
    response::ApiResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // 站点内容API
        crate::handlers::content::get_banner,
        crate::handlers::content::update_banner,
        crate::handlers::content::get_basic_company_info,
        crate::handlers::content::update_basic_company_info,
        crate::handlers::content::get_about_company,
        crate::handlers::content::update_about_company,
        crate::handlers::content::get_contact_us,
        crate::handlers::content::update_contact_us,
        // 用户API
        crate::handlers::content::get_user,
        crate::handlers::content::update_user,
        // 文件上传API
        crate::handlers::upload::upload_file,
        crate::handlers::upload::upload_multiple_files,
    ),
    components(
        schemas(
            Banner,
            UpdateBannerRequest,
            BasicCompanyInfo,
            UpdateBasicCompanyInfoRequest,
            AboutCompany,
            UpdateAboutCompanyRequest,
            ContactUs,
            UpdateContactUsRequest,
            User,
            UpdateUserRequest,
            UploadForm,
            UploadedFileMetadata,
            // 通用响应模型
            ApiResponse<Banner>,
            ApiResponse<BasicCompanyInfo>,
            ApiResponse<AboutCompany>,
            ApiResponse<ContactUs>,
            ApiResponse<User>,
            ApiResponse<UploadedFileMetadata>,
            ApiResponse<Vec<UploadedFileMetadata>>,
        )
    ),
    tags(
        (name = "站点内容", description = "横幅、公司信息、关于我们、联系方式的读取与更新"),
        (name = "用户管理", description = "用户资料的读取与更新"),
        (name = "文件上传", description = "上传文件到对象存储并返回公网地址")
    ),
    info(
        title = "Website Backend API",
        version = "0.1.0",
        description = "企业官网后端 REST API 文档"
    ),
    servers(
        (url = "http://localhost:3000", description = "开发环境")
    )
)]
pub struct ApiDoc;
