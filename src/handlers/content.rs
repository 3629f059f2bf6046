use axum::{extract::State, response::Json};

use crate::{
    error::AppError,
    handlers::{
        AppState,
        extract::{ApiJson, ApiPath},
    },
    models::{
        AboutCompany, Banner, BasicCompanyInfo, ContactUs, UpdateAboutCompanyRequest,
        UpdateBannerRequest, UpdateBasicCompanyInfoRequest, UpdateContactUsRequest,
        UpdateUserRequest, User,
    },
    response::ApiResponse,
};

/// 获取横幅
#[utoipa::path(
    get,
    path = "/banners",
    responses(
        (status = 200, description = "成功，不存在时 data 为 null", body = ApiResponse<Banner>),
        (status = 503, description = "数据库服务不可用")
    ),
    tag = "站点内容"
)]
pub async fn get_banner(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Option<Banner>>>, AppError> {
    let banner = app_state.content()?.banners.find_one().await?;
    Ok(Json(ApiResponse::success(banner)))
}

/// 更新横幅（局部更新）
#[utoipa::path(
    put,
    path = "/banners",
    request_body = UpdateBannerRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<Banner>),
        (status = 404, description = "记录不存在")
    ),
    tag = "站点内容"
)]
pub async fn update_banner(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateBannerRequest>,
) -> Result<Json<ApiResponse<Banner>>, AppError> {
    let banner = app_state.content()?.banners.update(req).await?;
    Ok(Json(ApiResponse::success(banner)))
}

/// 获取公司基本信息
#[utoipa::path(
    get,
    path = "/basic-company-info",
    responses(
        (
            status = 200,
            description = "成功，不存在时 data 为 null",
            body = ApiResponse<BasicCompanyInfo>
        ),
        (status = 503, description = "数据库服务不可用")
    ),
    tag = "站点内容"
)]
pub async fn get_basic_company_info(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Option<BasicCompanyInfo>>>, AppError> {
    let info = app_state.content()?.company_info.find_one().await?;
    Ok(Json(ApiResponse::success(info)))
}

#[utoipa::path(
    put,
    path = "/basic-company-info",
    request_body = UpdateBasicCompanyInfoRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<BasicCompanyInfo>),
        (status = 404, description = "记录不存在")
    ),
    tag = "站点内容"
)]
pub async fn update_basic_company_info(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateBasicCompanyInfoRequest>,
) -> Result<Json<ApiResponse<BasicCompanyInfo>>, AppError> {
    let info = app_state.content()?.company_info.update(req).await?;
    Ok(Json(ApiResponse::success(info)))
}

#[utoipa::path(
    get,
    path = "/about-companies",
    responses(
        (
            status = 200,
            description = "成功，不存在时 data 为 null",
            body = ApiResponse<AboutCompany>
        )
    ),
    tag = "站点内容"
)]
pub async fn get_about_company(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Option<AboutCompany>>>, AppError> {
    let about = app_state.content()?.about_companies.find_one().await?;
    Ok(Json(ApiResponse::success(about)))
}

#[utoipa::path(
    put,
    path = "/about-companies",
    request_body = UpdateAboutCompanyRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<AboutCompany>),
        (status = 404, description = "记录不存在")
    ),
    tag = "站点内容"
)]
pub async fn update_about_company(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateAboutCompanyRequest>,
) -> Result<Json<ApiResponse<AboutCompany>>, AppError> {
    let about = app_state.content()?.about_companies.update(req).await?;
    Ok(Json(ApiResponse::success(about)))
}

#[utoipa::path(
    get,
    path = "/contact-us",
    responses(
        (status = 200, description = "成功，不存在时 data 为 null", body = ApiResponse<ContactUs>)
    ),
    tag = "站点内容"
)]
pub async fn get_contact_us(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Option<ContactUs>>>, AppError> {
    let contact = app_state.content()?.contact_us.find_one().await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    put,
    path = "/contact-us",
    request_body = UpdateContactUsRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<ContactUs>),
        (status = 404, description = "记录不存在")
    ),
    tag = "站点内容"
)]
pub async fn update_contact_us(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<UpdateContactUsRequest>,
) -> Result<Json<ApiResponse<ContactUs>>, AppError> {
    let contact = app_state.content()?.contact_us.update(req).await?;
    Ok(Json(ApiResponse::success(contact)))
}

/// 获取用户
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "用户ID")),
    responses(
        (status = 200, description = "成功，不存在时 data 为 null", body = ApiResponse<User>)
    ),
    tag = "用户管理"
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ApiResponse<Option<User>>>, AppError> {
    let user = app_state.content()?.users.find_by_id(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// 更新用户资料
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "用户ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<User>),
        (status = 404, description = "用户不存在")
    ),
    tag = "用户管理"
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = app_state.content()?.users.update_by_id(id, req).await?;
    Ok(Json(ApiResponse::success(user)))
}
